//! Request routing for the mock data store.
//!
//! Kept free of socket types so the REST semantics can be tested directly.

use std::sync::{Mutex, PoisonError};

use hero_core::entities::{Hero, HeroId, NewHero};
use hero_core::table::HeroTable;
use serde_json::{Value, json};

/// Path prefix every hero endpoint lives under.
pub const HEROES_PATH: &str = "/api/heroes";

/// HTTP verbs the store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Other,
}

/// Status code plus optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    const fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "error": message.into() }))
    }
}

/// Route one request against the table.
pub fn handle(table: &Mutex<HeroTable>, verb: Verb, url: &str, body: &str) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = path.trim_end_matches('/');

    let Some(rest) = path.strip_prefix(HEROES_PATH) else {
        return Reply::error(404, format!("no route for {path}"));
    };

    // Table operations never leave it half-updated.
    let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);

    match (verb, rest) {
        (Verb::Get, "") => list(&table, query),
        (Verb::Post, "") => create(&mut table, body),
        (Verb::Put, "") => update(&mut table, body),
        (verb, id) if id.starts_with('/') => match id[1..].parse::<HeroId>() {
            Ok(id) => match verb {
                Verb::Get => table.get(id).map_or_else(
                    || Reply::error(404, format!("hero id={id} not found")),
                    |hero| Reply::json(200, json!(hero)),
                ),
                Verb::Delete => {
                    table.remove(id);
                    Reply::empty(204)
                }
                _ => Reply::error(405, "method not allowed"),
            },
            Err(_) => Reply::error(404, format!("hero '{}' not found", &id[1..])),
        },
        (_, "") => Reply::error(405, "method not allowed"),
        _ => Reply::error(404, format!("no route for {path}")),
    }
}

fn list(table: &HeroTable, query: &str) -> Reply {
    let mut heroes = table.list();
    for (key, value) in parse_query(query) {
        match key.as_str() {
            "name" => {
                let matches = table.search(&value);
                heroes.retain(|hero| matches.contains(hero));
            }
            "id" => match value.parse::<HeroId>() {
                Ok(id) => heroes.retain(|hero| hero.id == id),
                Err(_) => heroes.clear(),
            },
            _ => {}
        }
    }
    Reply::json(200, json!(heroes))
}

fn create(table: &mut HeroTable, body: &str) -> Reply {
    let new: NewHero = match serde_json::from_str(body) {
        Ok(new) => new,
        Err(error) => return Reply::error(400, format!("invalid hero payload: {error}")),
    };
    match table.insert(new) {
        Ok(hero) => Reply::json(201, json!(hero)),
        Err(error) => Reply::error(400, error.to_string()),
    }
}

fn update(table: &mut HeroTable, body: &str) -> Reply {
    let hero: Hero = match serde_json::from_str(body) {
        Ok(hero) => hero,
        Err(error) => return Reply::error(400, format!("invalid hero payload: {error}")),
    };
    match table.upsert(hero) {
        Ok(_) => Reply::empty(204),
        Err(error) => Reply::error(400, error.to_string()),
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter_map(|(key, value)| {
            let value = value.replace('+', " ");
            let value = urlencoding::decode(&value).ok()?;
            Some((key.to_string(), value.into_owned()))
        })
        .collect()
}
