use chrono::NaiveDate;

use crate::api::{CustomerId, ProductId, PurchaseId, SortOrder};
use crate::db::models::{Customer, Dataset, Product, Purchase};
use crate::db::repositories::LocalRepository;
use crate::db::services;
use crate::services::error::QueryError;

fn sample_dataset() -> Dataset {
    Dataset {
        customers: vec![
            Customer {
                id: CustomerId::new("c-1"),
                name: "김철수".to_string(),
            },
            Customer {
                id: CustomerId::new("c-2"),
                name: "이영희".to_string(),
            },
        ],
        products: vec![Product {
            id: ProductId::new("p-1"),
            name: "텀블러".to_string(),
            price: 25_000,
            thumbnail: "https://img.example.com/p-1.jpg".to_string(),
        }],
        purchases: vec![Purchase {
            id: PurchaseId::new("o-1"),
            customer_id: CustomerId::new("c-1"),
            product_id: ProductId::new("p-1"),
            quantity: 2,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        }],
    }
}

#[tokio::test]
async fn test_health_check_passes_through() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());

    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
}

#[tokio::test]
async fn test_load_dataset_reports_record_count() {
    let repo = LocalRepository::new();
    let loaded = services::load_dataset(&repo, sample_dataset()).await.unwrap();
    assert_eq!(loaded, 4);
    assert_eq!(repo.purchase_count(), 1);
}

#[tokio::test]
async fn test_purchase_frequency_through_repository() {
    let repo = LocalRepository::from_dataset(sample_dataset());

    let buckets = services::purchase_frequency(&repo, None, None).await.unwrap();

    assert_eq!(buckets.len(), 10);
    assert_eq!(buckets[1].count, 2);
}

#[tokio::test]
async fn test_purchase_frequency_rejects_one_sided_range() {
    let repo = LocalRepository::from_dataset(sample_dataset());

    let err = services::purchase_frequency(&repo, Some("2024-07-01"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Validation(_)));
}

#[tokio::test]
async fn test_customer_summaries_through_repository() {
    let repo = LocalRepository::from_dataset(sample_dataset());

    let summaries = services::customer_summaries(&repo, SortOrder::Desc, None)
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, CustomerId::new("c-1"));
    assert_eq!(summaries[0].total_amount, 25_000);
}

#[tokio::test]
async fn test_customer_purchase_details_through_repository() {
    let repo = LocalRepository::from_dataset(sample_dataset());

    let details = services::customer_purchase_details(&repo, &CustomerId::new("c-1"))
        .await
        .unwrap();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].product_name, "텀블러");
}

#[tokio::test]
async fn test_unhealthy_repository_surfaces_repository_error() {
    let repo = LocalRepository::from_dataset(sample_dataset());
    repo.set_healthy(false);

    let err = services::customer_summaries(&repo, SortOrder::Id, None)
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Repository(_)));
}
