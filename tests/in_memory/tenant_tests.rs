//! In-memory integration tests for tenant management.

use crate::in_memory::helpers::{TestTenantService, tenant_service};
use rendezvous::tenant::{
    domain::{TenantDomainError, TenantId},
    ports::TenantRepositoryError,
    services::{CreateTenantRequest, TenantServiceError, UpdateTenantRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_find_by_id_and_slug(tenant_service: TestTenantService) {
    let created = tenant_service
        .create(CreateTenantRequest::new("Acme Corp", "Acme-Corp"))
        .await
        .expect("creation should succeed");
    assert_eq!(created.slug().as_str(), "acme-corp");

    let by_id = tenant_service
        .get(created.id())
        .await
        .expect("lookup should succeed")
        .expect("tenant exists");
    let by_slug = tenant_service
        .get_by_slug("acme-corp")
        .await
        .expect("lookup should succeed")
        .expect("tenant exists");

    assert_eq!(by_id, created);
    assert_eq!(by_slug.id(), created.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_ordered_by_slug(tenant_service: TestTenantService) {
    for (name, slug) in [("Zeta", "zeta"), ("Alpha", "alpha"), ("Mid", "mid-tier")] {
        tenant_service
            .create(CreateTenantRequest::new(name, slug))
            .await
            .expect("creation should succeed");
    }

    let tenants = tenant_service.list().await.expect("listing should succeed");
    let slugs: Vec<&str> = tenants.iter().map(|t| t.slug().as_str()).collect();

    assert_eq!(slugs, ["alpha", "mid-tier", "zeta"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_slug_is_rejected(tenant_service: TestTenantService) {
    tenant_service
        .create(CreateTenantRequest::new("First", "shared"))
        .await
        .expect("first creation should succeed");

    let result = tenant_service
        .create(CreateTenantRequest::new("Second", "shared"))
        .await;

    assert!(matches!(
        result,
        Err(TenantServiceError::Repository(TenantRepositoryError::DuplicateSlug(ref slug)))
            if slug.as_str() == "shared"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_moves_slug_and_frees_old_one(tenant_service: TestTenantService) {
    let created = tenant_service
        .create(CreateTenantRequest::new("Acme", "acme"))
        .await
        .expect("creation should succeed");

    let updated = tenant_service
        .update(
            created.id(),
            UpdateTenantRequest::new()
                .with_name("Acme Holdings")
                .with_slug("acme-holdings"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.name().as_str(), "Acme Holdings");
    assert!(updated.updated_at() >= created.updated_at());
    assert!(
        tenant_service
            .get_by_slug("acme")
            .await
            .expect("lookup should succeed")
            .is_none()
    );
    tenant_service
        .create(CreateTenantRequest::new("New Acme", "acme"))
        .await
        .expect("released slug can be reused");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_tenant_reports_not_found(tenant_service: TestTenantService) {
    let missing = TenantId::new();

    let result = tenant_service
        .update(missing, UpdateTenantRequest::new().with_name("Ghost"))
        .await;

    assert!(matches!(
        result,
        Err(TenantServiceError::Repository(TenantRepositoryError::NotFound(id))) if id == missing
    ));
}

#[rstest]
#[case("", "valid", TenantDomainError::EmptyName)]
#[case("Name", "   ", TenantDomainError::EmptySlug)]
#[case("Name", "bad--slug", TenantDomainError::InvalidSlug("bad--slug".to_owned()))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_never_reaches_storage(
    tenant_service: TestTenantService,
    #[case] name: &str,
    #[case] slug: &str,
    #[case] expected: TenantDomainError,
) {
    let result = tenant_service
        .create(CreateTenantRequest::new(name, slug))
        .await;

    assert!(matches!(result, Err(TenantServiceError::Domain(ref err)) if *err == expected));
    assert!(tenant_service.list().await.expect("listing").is_empty());
}
