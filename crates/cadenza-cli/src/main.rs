//! cadenza CLI — exercise the playback sequencer over a JSON library.
//!
//! Commands:
//!   cadenza <library.json> list [property] [asc|desc]   Show the sorted view
//!   cadenza <library.json> play <index> [property]      Walk playback order
//!   cadenza <library.json> shuffle [seed]               Walk a shuffled order
//!   cadenza <library.json> search <query>               Search the library
//!   cadenza <library.json> session <property> [asc|desc] Show the state blob
//!
//! The library file is a JSON array of objects; `id` is the identity key,
//! every other string/number field becomes a sortable property.

use cadenza_core::{
    props, FilteredOrderedView, MediaItem, MediaLibrary, PlaybackCursor, PropertySource,
    SessionState, ShuffleSequencer, SortDirection, SortSpec,
};
use serde_json::Value;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let library = match load_library(&args[0]) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("failed to load library {}: {}", args[0], e);
            return;
        }
    };

    match args[1].as_str() {
        "list" => cmd_list(&library, &args[2..]),
        "play" => cmd_play(&library, &args[2..]),
        "shuffle" => cmd_shuffle(&library, &args[2..]),
        "search" => cmd_search(&library, &args[2..]),
        "session" => cmd_session(&args[2..]),
        other => {
            eprintln!("unknown command: {}", other);
            print_usage();
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(library: &MediaLibrary, args: &[String]) {
    let view = sorted_view(library, args);
    if view.count() == 0 {
        println!("library is empty");
        return;
    }
    for index in 0..view.count() {
        if let Some(item) = view.at(index) {
            println!("{:3}  {}", index, describe(&item));
        }
    }
}

fn cmd_play(library: &MediaLibrary, args: &[String]) {
    if args.is_empty() {
        eprintln!("usage: cadenza <library.json> play <index> [property]");
        return;
    }
    let start = match args[0].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid index: {}", args[0]);
            return;
        }
    };

    let view = sorted_view(library, &args[1..]);
    match PlaybackCursor::start(&view, start) {
        Ok(cursor) => walk(cursor),
        Err(e) => eprintln!("cannot start playback: {}", e),
    }
}

fn cmd_shuffle(library: &MediaLibrary, args: &[String]) {
    let mut sequencer = match args.first().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => ShuffleSequencer::with_seed(seed),
        None => ShuffleSequencer::new(),
    };

    let view = FilteredOrderedView::new(library.clone());
    match sequencer.start(&view) {
        Ok(cursor) => walk(cursor),
        Err(e) => eprintln!("cannot start shuffle: {}", e),
    }
}

fn cmd_search(library: &MediaLibrary, args: &[String]) {
    if args.is_empty() {
        eprintln!("usage: cadenza <library.json> search <query>");
        return;
    }
    let results = library.search(&args.join(" "));
    if results.is_empty() {
        println!("no results");
        return;
    }
    for item in &results {
        println!("{}", describe(item));
    }
}

fn cmd_session(args: &[String]) {
    if args.is_empty() {
        eprintln!("usage: cadenza <library.json> session <property> [asc|desc]");
        return;
    }
    let state = SessionState::encode(&args[0], parse_direction(args.get(1)));
    println!("{}", state.to_value());
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_library(path: &str) -> Result<MediaLibrary, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let entries: Vec<Value> = serde_json::from_str(&raw).map_err(|e| e.to_string())?;

    let library = MediaLibrary::new();
    for entry in entries {
        let Some(id) = entry.get("id").and_then(Value::as_str) else {
            log::warn!("skipping library entry without id: {}", entry);
            continue;
        };
        let mut item = MediaItem::new(id);
        if let Some(fields) = entry.as_object() {
            for (name, value) in fields {
                if name == "id" {
                    continue;
                }
                match value {
                    Value::String(s) => item.set(name.clone(), s.as_str()),
                    Value::Number(n) => {
                        if let Some(f) = n.as_f64() {
                            item.set(name.clone(), f);
                        }
                    }
                    _ => {}
                }
            }
        }
        library.insert(item);
    }
    Ok(library)
}

fn sorted_view(library: &MediaLibrary, args: &[String]) -> FilteredOrderedView {
    let mut view = FilteredOrderedView::new(library.clone());
    if let Some(property) = args.first() {
        view.set_sort(SortSpec::by(property, parse_direction(args.get(1))));
    }
    view
}

fn parse_direction(arg: Option<&String>) -> SortDirection {
    match arg.map(String::as_str) {
        Some("desc") | Some("descending") => SortDirection::Descending,
        _ => SortDirection::Ascending,
    }
}

fn walk(mut cursor: PlaybackCursor) {
    while let Some(item) = cursor.current() {
        println!("{:3}  {}", cursor.position(), describe(&item));
        cursor.advance();
    }
    println!("-- end of queue ({} items) --", cursor.len());
}

fn describe(item: &MediaItem) -> String {
    let title = text_prop(item, props::TITLE).unwrap_or_else(|| item.key().to_string());
    match text_prop(item, props::ARTIST) {
        Some(artist) => format!("{} — {}", title, artist),
        None => title,
    }
}

fn text_prop(item: &MediaItem, name: &str) -> Option<String> {
    item.property(name)
        .and_then(|v| v.as_text().map(String::from))
}

fn print_usage() {
    eprintln!("usage: cadenza <library.json> <command> [args]");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  list [property] [asc|desc]     show the sorted view");
    eprintln!("  play <index> [property]        walk playback order from index");
    eprintln!("  shuffle [seed]                 walk a shuffled order");
    eprintln!("  search <query>                 search the library");
    eprintln!("  session <property> [asc|desc]  print the persisted state blob");
}
