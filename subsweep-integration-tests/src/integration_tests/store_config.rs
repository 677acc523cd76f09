use std::io::Write;
use subsweep_common::load_config_file;
use subsweep_store::{StoreConfig, SubscriptionStore};
use tempfile::NamedTempFile;

fn write_config_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    file.as_file().write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn dummy_store_config_seeds_records() {
    let config_file = write_config_file(indoc::indoc!(
        r#"
        kind = "dummy"

        [initial_state]
        orders = [10, 11]
        customers = [100]

        [[initial_state.subscriptions]]
        id = 1
        status = "cancelled"
        customer_id = 100
        order_ids = [10, 11]
        date_created = "2024-03-01T12:00:00+00:00"
        "#
    ));

    let config: StoreConfig = load_config_file(config_file.path()).unwrap();
    let store = config.create_store();

    let subscriptions = store.list_subscriptions("cancelled", 10, 0).await.unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].id, 1);
    assert_eq!(subscriptions[0].customer_id, 100);
    assert_eq!(subscriptions[0].order_ids, vec![10, 11]);
}

#[test]
fn http_store_config_parses() {
    let config_file = write_config_file(indoc::indoc!(
        r#"
        kind = "http"
        url = "https://shop.example.com/wp-json/wc/v3/"
        consumer_key = "ck_0123456789abcdef"
        consumer_secret = "cs_0123456789abcdef"
        "#
    ));

    let config: StoreConfig = load_config_file(config_file.path()).unwrap();
    assert!(matches!(config, StoreConfig::Http(_)));
}

#[test]
fn unknown_store_kind_is_rejected() {
    let config_file = write_config_file(indoc::indoc!(
        r#"
        kind = "carrier-pigeon"
        "#
    ));

    assert!(load_config_file::<StoreConfig>(config_file.path()).is_err());
}
