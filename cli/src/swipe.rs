//! Interactive swipe loop.
//!
//! One command per line on stdin; every action completes (including the
//! follow-up fetch after a like or skip) before the next line is read.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use trivet_core::{
    ingredients, render_grocery_list, Config, MealDbClient, MealRecord, MealStore, Session,
    StoreError,
};

pub(crate) async fn run(config: &Config) -> Result<()> {
    let source = MealDbClient::builder()
        .endpoint(config.endpoint.clone())
        .timeout(config.timeout)
        .build()
        .context("failed to build the meal client")?;
    let store = MealStore::new(config.data_dir.clone());

    let (mut session, _) = Session::start(Box::new(source), store).await;
    show_current(&session);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "l" | "like" => like(&mut session).await,
            "s" | "skip" | "n" => {
                // A failed fetch keeps the prior meal; the card just
                // doesn't change.
                let _ = session.skip().await;
                show_current(&session);
            }
            "g" | "groceries" => {
                if session.groceries().is_empty() {
                    println!("Grocery list is empty.");
                } else {
                    print!("{}", render_grocery_list(session.groceries()));
                }
            }
            "m" | "meals" => {
                if session.liked().is_empty() {
                    println!("No liked meals yet.");
                } else {
                    for (name, source) in session.liked() {
                        if source.is_empty() {
                            println!("{}", name);
                        } else {
                            println!("{} ({})", name, source);
                        }
                    }
                }
            }
            "save" => match session.save() {
                Ok(()) => println!(
                    "Saved {} meals and {} grocery items.",
                    session.liked().len(),
                    session.groceries().len()
                ),
                Err(e) => println!("Save failed: {}", e),
            },
            "load" => match session.load() {
                Ok(()) => println!(
                    "Loaded {} meals and {} grocery items.",
                    session.liked().len(),
                    session.groceries().len()
                ),
                Err(StoreError::NotFound) => println!("No saved state found."),
                Err(e) => println!("Load failed: {}", e),
            },
            "reset" => {
                session.reset_meals();
                println!("Liked meals and grocery list emptied.");
            }
            "clear" => match session.clear() {
                Ok(()) => println!("Stored data removed. In-memory lists are unchanged."),
                Err(e) => println!("Clear failed: {}", e),
            },
            "h" | "help" | "?" => print_help(),
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown command: {}. `h` lists the commands.", other),
        }
    }

    Ok(())
}

async fn like(session: &mut Session) {
    let Some(name) = session.current().map(|m| m.name.clone()) else {
        println!("No meal to like. `s` fetches one.");
        return;
    };

    // The like is recorded even when the follow-up fetch fails; in that
    // case the prior meal stays on the card.
    let _ = session.accept().await;
    println!("Liked {}.", name);
    show_current(session);
}

fn show_current(session: &Session) {
    match session.current() {
        Some(meal) => {
            println!();
            print_card(meal);
        }
        None => println!("No meal to show. `s` fetches one."),
    }
}

pub(crate) fn print_card(meal: &MealRecord) {
    println!("{}", meal.name);
    match (meal.category(), meal.area()) {
        (Some(category), Some(area)) => println!("  {} ({})", category, area),
        (Some(category), None) => println!("  {}", category),
        (None, Some(area)) => println!("  {}", area),
        (None, None) => {}
    }
    println!("  image: {}", meal.thumbnail_preview());
    if let Some(video) = meal.video() {
        println!("  video: {}", video);
    }
    if let Some(source) = meal.source() {
        println!("  source: {}", source);
    }

    let pairs: Vec<_> = ingredients(meal).collect();
    if !pairs.is_empty() {
        println!();
        for (ingredient, measure) in pairs {
            if measure.is_empty() {
                println!("  - {}", ingredient);
            } else {
                println!("  - {}: {}", ingredient, measure);
            }
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  l, like       like this meal and fetch the next one");
    println!("  s, skip       skip this meal and fetch the next one");
    println!("  g, groceries  show the grocery list so far");
    println!("  m, meals      show the liked meals");
    println!("  save          persist the current state");
    println!("  load          replace state with the saved copy");
    println!("  reset         empty both in-memory lists");
    println!("  clear         delete the saved copy on disk");
    println!("  h, help       show this help");
    println!("  q, quit       exit");
}
