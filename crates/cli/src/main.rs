use deckforge_core::{
    present, BuilderState, CardRecord, Catalog, Deck, EventBus, Gesture, Renderer,
    SpeechCapability, SpeechResult, SpeechSession, VoiceCommand,
};
use deckforge_data::load_catalog_or_empty;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::Path;

/// Line-oriented renderer. Every widget surface sees the same state; this
/// one prints it.
struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_deck(&mut self, deck: &Deck) {
        println!("deck:");
        for (position, slot) in deck.slots().iter().enumerate() {
            match slot {
                Some(held) if held.evo => println!("  {}: {} [evo]", position, held.name()),
                Some(held) => println!("  {}: {}", position, held.name()),
                None => println!("  {}: -", position),
            }
        }
    }

    fn render_card_picker(&mut self, cost: &str, cards: &[CardRecord]) {
        println!("cost {} cards:", cost);
        for (index, card) in cards.iter().enumerate() {
            println!("  {}: {}", index, card.name);
        }
    }

    fn notify(&mut self, message: &str) {
        println!("note: {}", message);
    }
}

/// Stands in for a platform recognizer: `listen` queues the text as the
/// transcript the attempt will hear.
#[derive(Default)]
struct ScriptedRecognizer {
    script: VecDeque<SpeechResult>,
    active: bool,
}

impl ScriptedRecognizer {
    fn queue_transcript(&mut self, text: &str) {
        self.script
            .push_back(SpeechResult::Transcript(text.to_string()));
    }
}

impl SpeechCapability for ScriptedRecognizer {
    fn start(&mut self) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn poll(&mut self) -> Option<SpeechResult> {
        if !self.active {
            return None;
        }
        self.script.pop_front()
    }
}

fn main() {
    env_logger::init();
    let catalog = load_catalog_or_empty(Path::new("assets/cards.json"));
    if catalog.is_empty() {
        println!("catalog is empty; cost, pick and add have nothing to offer");
    } else {
        println!("catalog: {} cards", catalog.len());
    }
    let mut state = BuilderState::new(catalog);
    let mut events = EventBus::default();
    let mut renderer = TextRenderer;
    let mut session = SpeechSession::new();
    let mut recognizer = ScriptedRecognizer::default();
    print_help();
    loop {
        let line = match read_line("> ") {
            Some(line) => line,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" => break,
            "costs" => print_costs(&state.catalog),
            "cost" => {
                if args.is_empty() {
                    println!("usage: cost <label>");
                    continue;
                }
                if !state.select_cost(args[0], &mut events) {
                    println!("no cards at cost '{}'", args[0]);
                    continue;
                }
            }
            "pick" => {
                let Some(cost) = state.selected_cost.clone() else {
                    println!("select a cost first (cost <label>)");
                    continue;
                };
                if args.is_empty() {
                    println!("usage: pick <index>");
                    continue;
                }
                let index = match args[0].parse::<usize>() {
                    Ok(index) => index,
                    Err(_) => {
                        println!("invalid index '{}'", args[0]);
                        continue;
                    }
                };
                let picked = state
                    .catalog
                    .cards_for_cost(&cost)
                    .and_then(|cards| cards.get(index))
                    .cloned();
                let Some(card) = picked else {
                    println!("no card {} at cost {}", index, cost);
                    continue;
                };
                let _ = state.apply_gesture(Gesture::CardChosen(card), &mut events);
            }
            "add" => {
                if args.is_empty() {
                    println!("usage: add <name>");
                    continue;
                }
                let name = args.join(" ");
                let Some(card) = state.catalog.find_by_name(&name).cloned() else {
                    println!("no card named '{}'", name);
                    continue;
                };
                let _ = state.apply_gesture(Gesture::CardChosen(card), &mut events);
            }
            "slot" | "evo" => {
                if args.is_empty() {
                    println!("usage: {} <position>", cmd);
                    continue;
                }
                let position = match args[0].parse::<usize>() {
                    Ok(position) => position,
                    Err(_) => {
                        println!("invalid position '{}'", args[0]);
                        continue;
                    }
                };
                let gesture = if cmd == "slot" {
                    Gesture::SlotClicked(position)
                } else {
                    Gesture::EvolutionDropped(position)
                };
                if let Err(err) = state.apply_gesture(gesture, &mut events) {
                    println!("error: {}", err);
                }
            }
            "undo" => {
                if !state.undo(&mut events) {
                    println!("nothing to undo");
                }
            }
            "deck" => renderer.render_deck(&state.deck),
            "say" => {
                if args.is_empty() {
                    println!("usage: say <transcript>");
                    continue;
                }
                let _ =
                    state.apply_gesture(Gesture::VoiceTranscript(args.join(" ")), &mut events);
            }
            "listen" => {
                if args.is_empty() {
                    println!("usage: listen <transcript>");
                    continue;
                }
                if !session.start() {
                    println!("already listening");
                    continue;
                }
                recognizer.queue_transcript(&args.join(" "));
                recognizer.start();
                pump_recognizer(&mut state, &mut session, &mut recognizer, &mut events);
            }
            other => println!("unknown command '{}', try help", other),
        }
        present(&state, &mut events, &mut renderer);
    }
}

/// Feeds recognizer results through the session until the script runs dry,
/// then stops both sides. Only the first transcript lands; the session is
/// idle again by the time any later one arrives.
fn pump_recognizer(
    state: &mut BuilderState,
    session: &mut SpeechSession,
    recognizer: &mut ScriptedRecognizer,
    events: &mut EventBus,
) {
    while let Some(result) = recognizer.poll() {
        match result {
            SpeechResult::Transcript(text) => {
                println!("heard: {}", text);
                if let Some(command) = session.on_transcript(&text) {
                    if matches!(command, VoiceCommand::Unrecognized) {
                        log::debug!("transcript is not a command: {}", text);
                    }
                    state.apply_command(command, events);
                }
            }
            SpeechResult::Error(message) => {
                log::warn!("speech error: {}", message);
                session.on_error();
            }
        }
    }
    session.stop();
    recognizer.stop();
}

fn print_costs(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("catalog is empty");
        return;
    }
    println!("costs:");
    for group in catalog.groups() {
        println!("  {}: {} cards", group.cost, group.cards.len());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  help|h|?             show this help");
    println!("  costs                list cost groups in the catalog");
    println!("  cost <label>         open the picker for one cost group");
    println!("  pick <index>         add a card from the open picker");
    println!("  add <name>           add a card by exact name");
    println!("  slot <position>      cycle the card at a slot to the back");
    println!("  evo <position>       toggle evolution on a slot");
    println!("  undo                 revert the latest deck change");
    println!("  deck                 show the deck");
    println!("  say <transcript>     feed one voice transcript directly");
    println!("  listen <transcript>  run a scripted listening attempt");
    println!("  quit|exit            exit");
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}
