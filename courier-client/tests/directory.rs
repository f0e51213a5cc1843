//! Directory search tests

use std::time::Duration;

use async_trait::async_trait;

use courier_client::{ClientResult, DebouncedSearch, SearchApi};
use shared::models::{Customer, Driver, Merchant};

struct MockDirectory;

#[async_trait]
impl SearchApi for MockDirectory {
    async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>> {
        Ok(vec![Customer {
            id: "c-1".to_string(),
            name: query.to_string(),
            phone: Some("0500000001".to_string()),
            address: None,
        }])
    }

    async fn search_drivers(&self, query: &str) -> ClientResult<Vec<Driver>> {
        Ok(vec![Driver {
            id: "d-1".to_string(),
            name: query.to_string(),
            phone: None,
        }])
    }

    async fn search_merchants(&self, _query: &str) -> ClientResult<Vec<Merchant>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn customer_and_driver_search_flow_through_the_debouncer() {
    let api = MockDirectory;
    let search = DebouncedSearch::with_delay(Duration::from_millis(1));

    let customers = search
        .run(|| api.search_customers("Huda"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, "c-1");
    assert_eq!(customers[0].name, "Huda");

    let drivers = search
        .run(|| api.search_drivers("Imran"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, "d-1");
    assert_eq!(drivers[0].name, "Imran");
}
