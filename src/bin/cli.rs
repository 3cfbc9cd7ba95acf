use bath_tool::fetch::OpenMeteoClient;
use bath_tool::localization::Phrase;
use bath_tool::{
    BathTimePreference, Classification, DogProfile, Locale, ProfileBook, RefreshCoordinator,
    WeatherBundle, load_book_from_csv, load_book_from_json, save_book_to_csv, save_book_to_json,
    schedule,
};
use std::fs;
use std::io::{self, Write};
use std::str::FromStr;

fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.chars().count());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_profiles(book: &ProfileBook) -> String {
    let headers = [
        "idx", "sel", "name", "breed", "origin", "country", "fur_type", "pref",
    ];
    let rows: Vec<Vec<String>> = book
        .list()
        .iter()
        .enumerate()
        .map(|(idx, profile)| {
            vec![
                idx.to_string(),
                if idx == book.selected_index() {
                    "*".to_string()
                } else {
                    String::new()
                },
                profile.name.clone(),
                profile.breed.clone().unwrap_or_default(),
                profile.origin.clone().unwrap_or_default(),
                profile.country.clone().unwrap_or_default(),
                profile.fur_type.clone().unwrap_or_default(),
                profile.bath_time_pref.key().to_string(),
            ]
        })
        .collect();
    render_text_table(&headers, &rows)
}

fn render_schedule(bundle: &WeatherBundle, preference: BathTimePreference, locale: Locale) -> String {
    let recommendations = schedule(bundle, preference);
    let headers = ["day", "date", "time", "icon", "verdict", "weather", "why"];
    let rows: Vec<Vec<String>> = recommendations
        .iter()
        .map(|rec| {
            let why = match rec.classification {
                Classification::HotDry => locale.phrase(Phrase::WhyBest),
                Classification::MildDry => locale.phrase(Phrase::WhyOk),
                Classification::Wet => locale.phrase(Phrase::WhyNo),
            };
            vec![
                rec.day.format("%a").to_string(),
                rec.day.to_string(),
                rec.time_label(),
                rec.icon.clone(),
                rec.classification.label().to_string(),
                rec.description.clone(),
                why.to_string(),
            ]
        })
        .collect();
    render_text_table(&headers, &rows)
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the profile book\n  add <name...>                      Add a dog profile and select it\n  delete <idx>                       Remove a profile (selection resets to 0)\n  select <idx>                       Select a profile\n  breed   <idx> <text...>            Set breed\n  origin  <idx> <text...>            Set origin (city, region)\n  country <idx> <code>               Set two-letter country code\n  fur     <idx> <text...>            Set fur type\n  pref    <idx> <name>               Set bath time preference\n  pref list                          List bath time preferences\n  locale <en|fil|ja>                 Switch display language\n  save <json|csv> <path>             Persist the profile book to disk\n  load <json|csv> <path>             Load a profile book from disk\n  forecast load <json_path>          Load a forecast bundle from JSON\n  forecast show                      Summarize the loaded forecast\n  fetch                              Fetch the forecast for the selected dog\n  schedule                           Show the weekly bath schedule\n  quit|exit                          Exit"
    );
}

fn print_preferences() {
    println!("Available bath time preferences:");
    for (key, description) in BathTimePreference::variants() {
        println!("  {:<12} {}", key, description);
    }
}

fn forecast_summary(bundle: &WeatherBundle) -> String {
    let mut out = String::new();
    if let Some(current) = &bundle.current {
        let info = bath_tool::describe_weather_code(current.weather_code);
        out.push_str(&format!(
            "Current: {}°C {} {}\n",
            current.temperature, info.icon, info.description
        ));
    }
    let headers = ["date", "min °C", "max °C", "precip mm", "weather"];
    let rows: Vec<Vec<String>> = bundle
        .daily
        .iter()
        .map(|day| {
            let info = bath_tool::describe_weather_code(day.weather_code);
            vec![
                day.date.to_string(),
                day.temperature_min.to_string(),
                day.temperature_max.to_string(),
                day.precipitation_sum.to_string(),
                format!("{} {}", info.icon, info.description),
            ]
        })
        .collect();
    out.push_str(&render_text_table(&headers, &rows));
    out
}

fn parse_index(s: &str) -> Option<usize> {
    s.parse::<usize>().ok()
}

fn main() {
    let mut book = ProfileBook::new();
    let mut forecast: Option<WeatherBundle> = None;
    let mut locale = Locale::En;
    let coordinator = RefreshCoordinator::new();
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let client = OpenMeteoClient::new();

    println!("Bath Scheduler (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                if book.is_empty() {
                    println!("{}", locale.phrase(Phrase::NoDogs));
                } else {
                    println!("{}", render_profiles(&book));
                }
            }
            "add" => {
                let rest: Vec<&str> = parts.collect();
                if rest.is_empty() {
                    println!("Usage: add <name...>");
                    continue;
                }
                let name = rest.join(" ");
                match book.add(DogProfile::new(name)) {
                    Ok(index) => {
                        println!("Added profile at index {index}.");
                        println!("{}", render_profiles(&book));
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            "delete" => match parts.next().and_then(parse_index) {
                Some(idx) => match book.remove(idx) {
                    Ok(removed) => {
                        println!("Removed profile '{}'.", removed.name);
                        println!("{}", render_profiles(&book));
                    }
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: delete <idx>"),
            },
            "select" => match parts.next().and_then(parse_index) {
                Some(idx) => match book.select(idx) {
                    Ok(_) => println!("{} {}", locale.phrase(Phrase::SelectDog), idx),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: select <idx>"),
            },
            "breed" | "origin" | "country" | "fur" => {
                let idx_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (idx_s.and_then(parse_index), !rest.is_empty()) {
                    (Some(idx), true) => {
                        let text = rest.join(" ");
                        let res = match cmd {
                            "breed" => book.set_breed(idx, &text),
                            "origin" => book.set_origin(idx, &text),
                            "country" => book.set_country(idx, &text),
                            _ => book.set_fur_type(idx, &text),
                        };
                        match res {
                            Ok(_) => println!("{} set.\n{}", cmd, render_profiles(&book)),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: {} <idx> <text...>", cmd),
                }
            }
            "pref" => match parts.next() {
                Some("list") => print_preferences(),
                Some(idx_s) => {
                    let pref_s = parts.next();
                    match (parse_index(idx_s), pref_s) {
                        (Some(idx), Some(pref_s)) => match BathTimePreference::from_str(pref_s) {
                            Ok(pref) => match book.set_bath_time_pref(idx, pref) {
                                Ok(_) => {
                                    println!("Preference set.\n{}", render_profiles(&book));
                                }
                                Err(e) => println!("Error: {}", e),
                            },
                            Err(_) => {
                                println!(
                                    "Unknown preference '{}'. Use 'pref list' to list options.",
                                    pref_s
                                );
                            }
                        },
                        _ => println!("Usage: pref <idx> <name> | pref list"),
                    }
                }
                None => println!("Usage: pref <idx> <name> | pref list"),
            },
            "locale" => match parts.next() {
                Some("list") => {
                    println!("Available locales:");
                    for (key, description) in Locale::variants() {
                        println!("  {:<6} {}", key, description);
                    }
                }
                Some(code) => match Locale::from_str(code) {
                    Ok(parsed) => {
                        locale = parsed;
                        println!("Locale set to {}.", locale);
                    }
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: locale <en|fil|ja> | locale list"),
            },
            "save" => {
                let fmt = parts.next();
                let path = parts.next();
                match (fmt, path) {
                    (Some("json"), Some(path)) => match save_book_to_json(&book, path) {
                        Ok(_) => println!("Profile book saved to {}.", path),
                        Err(e) => println!("Error saving profiles: {}", e),
                    },
                    (Some("csv"), Some(path)) => match save_book_to_csv(&book, path) {
                        Ok(_) => println!("Profile book saved to {}.", path),
                        Err(e) => println!("Error saving profiles: {}", e),
                    },
                    _ => println!("Usage: save <json|csv> <path>"),
                }
            }
            "load" => {
                let fmt = parts.next();
                let path = parts.next();
                match (fmt, path) {
                    (Some("json"), Some(path)) => match load_book_from_json(path) {
                        Ok(loaded) => {
                            book = loaded;
                            println!("Profile book loaded from {}.", path);
                            println!("{}", render_profiles(&book));
                        }
                        Err(e) => println!("Error loading profiles: {}", e),
                    },
                    (Some("csv"), Some(path)) => match load_book_from_csv(path) {
                        Ok(loaded) => {
                            book = loaded;
                            println!("Profile book loaded from {}.", path);
                            println!("{}", render_profiles(&book));
                        }
                        Err(e) => println!("Error loading profiles: {}", e),
                    },
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            "forecast" => match parts.next() {
                Some("load") => match parts.next() {
                    Some(path) => match fs::read_to_string(path) {
                        Ok(contents) => match serde_json::from_str::<WeatherBundle>(&contents) {
                            Ok(bundle) => {
                                if !bundle.has_full_hourly_coverage() {
                                    println!(
                                        "Warning: hourly coverage is incomplete; affected days will show as Wet."
                                    );
                                }
                                forecast = Some(bundle);
                                println!("Forecast loaded from {}.", path);
                            }
                            Err(e) => println!("Invalid forecast JSON: {}", e),
                        },
                        Err(e) => println!("Error reading {}: {}", path, e),
                    },
                    None => println!("Usage: forecast load <json_path>"),
                },
                Some("show") => match &forecast {
                    Some(bundle) => println!("{}", forecast_summary(bundle)),
                    None => println!("No forecast loaded. Use 'forecast load' or 'fetch'."),
                },
                _ => println!("Usage: forecast load <json_path> | forecast show"),
            },
            "fetch" => {
                let Some(profile) = book.selected().cloned() else {
                    println!("{}", locale.phrase(Phrase::NoDogs));
                    continue;
                };
                let ticket = coordinator.begin();
                match runtime.block_on(client.forecast_for(&profile)) {
                    Ok(bundle) => {
                        if coordinator.commit(ticket) {
                            forecast = Some(bundle);
                            println!("Forecast fetched for {}.", profile.name);
                        } else {
                            println!("Fetch superseded by a newer request; result discarded.");
                        }
                    }
                    Err(e) => println!("Fetch error: {}", e),
                }
            }
            "schedule" => {
                let Some(profile) = book.selected() else {
                    println!("{}", locale.phrase(Phrase::NoDogs));
                    continue;
                };
                match &forecast {
                    Some(bundle) => {
                        println!(
                            "{} {} {}",
                            locale.phrase(Phrase::WeeklyBath),
                            locale.phrase(Phrase::For),
                            profile.name
                        );
                        println!("{}", render_schedule(bundle, profile.bath_time_pref, locale));
                    }
                    None => println!("No forecast loaded. Use 'forecast load' or 'fetch'."),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
