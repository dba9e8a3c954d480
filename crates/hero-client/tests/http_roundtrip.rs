//! End-to-end tests against the mock REST store over real HTTP.

use std::sync::Arc;

use hero_client::{HeroRoster, HeroService, HttpHeroStore, MessageLog};
use hero_core::entities::{Hero, NewHero};
use hero_core::table::HeroTable;
use hero_server::{MockServer, ServerOptions};
use pretty_assertions::assert_eq;

fn start() -> (MockServer, HeroService<HttpHeroStore>) {
    let server = MockServer::start(
        "127.0.0.1:0",
        HeroTable::seeded().into_shared(),
        ServerOptions::default(),
    )
    .expect("mock store binds");
    let store = HttpHeroStore::with_base_url(server.base_url()).expect("client builds");
    let service = HeroService::new(store, Arc::new(MessageLog::new()));
    (server, service)
}

#[tokio::test]
async fn create_then_list_over_http() {
    let (server, service) = start();
    let before: Vec<u32> = service.list().await.into_iter().map(|h| h.id).collect();

    let zorro = service
        .create(&NewHero {
            name: "Zorro".into(),
        })
        .await
        .expect("created");

    assert!(!before.contains(&zorro.id));
    let heroes = service.list().await;
    assert!(heroes.contains(&Hero::new(zorro.id, "Zorro")));
    assert!(server.snapshot().get(zorro.id).is_some());
}

#[tokio::test]
async fn get_update_delete_over_http() {
    let (server, service) = start();

    assert_eq!(service.get(12).await, Some(Hero::new(12, "Dr. Nice")));
    assert_eq!(service.get(12).await, service.get(12).await);

    assert!(service.update(&Hero::new(12, "Dr. Nicer")).await);
    assert_eq!(server.snapshot().get(12).unwrap().name, "Dr. Nicer");

    assert!(service.delete(12).await);
    assert_eq!(service.get(12).await, None);
    assert_eq!(service.get_no_404(12).await, None);

    let messages = service.messages().messages();
    assert!(messages.contains(&"HeroService: did not find hero id=12".to_string()));
    assert!(
        messages
            .iter()
            .any(|m| m.starts_with("HeroService: getHero id=12 failed: not found"))
    );
}

#[tokio::test]
async fn search_encodes_terms() {
    let (_server, service) = start();
    let names: Vec<String> = service
        .search("dr. i")
        .await
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, vec!["Dr. IQ"]);
}

#[tokio::test]
async fn blank_create_is_absorbed() {
    let (_server, service) = start();
    let created = service.create(&NewHero { name: "  ".into() }).await;
    assert_eq!(created, None);
    let last = service.messages().messages().pop().unwrap();
    assert!(last.starts_with("HeroService: addHero failed: API error (400)"));
}

#[tokio::test]
async fn roster_delete_is_local_first() {
    let (server, service) = start();
    let mut roster = HeroRoster::new(service);
    roster.load().await;

    let ack = roster.delete(13);
    assert!(roster.find(13).is_none());
    assert!(ack.await.unwrap());
    assert!(server.snapshot().get(13).is_none());
}

#[tokio::test]
async fn unreachable_store_falls_back() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let store = HttpHeroStore::with_base_url(format!("http://127.0.0.1:{port}/api")).unwrap();
    let service = HeroService::new(store, Arc::new(MessageLog::new()));

    assert!(service.list().await.is_empty());
    assert!(!service.delete(14).await);
    let messages = service.messages().messages();
    assert!(messages[0].starts_with("HeroService: getHeroes failed: HTTP error"));
    assert!(messages[1].starts_with("HeroService: deleteHero failed: HTTP error"));
}
