use chrono::Utc;
use std::io::Write;
use subsweep_common::{Subscription, load_config_file};
use subsweep_store::{StoreConfig, workflows};
use subsweep_testing_utils::{DummyShopServer, ShopRequest, ShopState};
use tempfile::NamedTempFile;

fn subscription(id: u64, status: &str, customer_id: u64, order_ids: Vec<u64>) -> Subscription {
    Subscription {
        id,
        status: status.into(),
        customer_id,
        order_ids,
        date_created: Utc::now().into(),
    }
}

async fn build_shop() -> DummyShopServer {
    DummyShopServer::new(ShopState {
        subscriptions: vec![
            subscription(1, "cancelled", 100, vec![10, 11]),
            subscription(2, "on-hold", 200, vec![12]),
            subscription(3, "cancelled", 300, Vec::new()),
        ],
        orders: vec![10, 11, 12],
        customers: vec![100, 200, 300],
    })
    .await
}

fn write_store_config(server: &DummyShopServer) -> NamedTempFile {
    let contents = format!(
        indoc::indoc!(
            r#"
            kind = "http"
            url = "{}"
            consumer_key = "ck_test"
            consumer_secret = "cs_test"
            "#
        ),
        server.base_url()
    );

    let file = NamedTempFile::new().unwrap();
    file.as_file().write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn purge_cancelled_subscriptions() {
    let mut server = build_shop().await;
    let config_file = write_store_config(&server);

    let config: StoreConfig = load_config_file(config_file.path()).unwrap();
    let processed = workflows::purge_subscriptions(config.create_store(), "cancelled", false)
        .await
        .unwrap();

    assert_eq!(processed, 2);
    assert_eq!(
        server
            .subscriptions()
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>(),
        vec![2]
    );
    assert_eq!(server.orders(), vec![12]);
    assert_eq!(server.customers(), vec![200]);

    server.stop().await;
}

#[tokio::test]
async fn purge_dry_run_leaves_the_shop_untouched() {
    let mut server = build_shop().await;
    let config_file = write_store_config(&server);

    let config: StoreConfig = load_config_file(config_file.path()).unwrap();
    let processed = workflows::purge_subscriptions(config.create_store(), "cancelled", true)
        .await
        .unwrap();

    assert_eq!(processed, 2);
    assert_eq!(server.subscriptions().len(), 3);
    assert_eq!(server.orders(), vec![10, 11, 12]);
    assert_eq!(server.customers(), vec![100, 200, 300]);

    assert!(
        server
            .requests()
            .iter()
            .all(|request| matches!(request, ShopRequest::ListSubscriptions { .. }))
    );

    server.stop().await;
}
