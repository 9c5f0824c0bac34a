//! Tests for the employee service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockEmployeeRepository;

#[fixture]
fn jane() -> EmployeeDto {
    EmployeeDto {
        id: None,
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@x.com".to_owned(),
    }
}

fn stored(id: i64, first_name: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: Some(EmployeeId::new(id)),
        first_name: first_name.to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@x.com".to_owned(),
    }
}

fn service(repo: MockEmployeeRepository) -> EmployeeServiceImpl<MockEmployeeRepository> {
    EmployeeServiceImpl::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn create_discards_client_supplied_id(jane: EmployeeDto) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save()
        .withf(|record| record.id.is_none())
        .times(1)
        .return_once(|mut record| {
            record.id = Some(EmployeeId::new(1));
            Ok(record)
        });

    let request = EmployeeDto {
        id: Some(EmployeeId::new(77)),
        ..jane
    };
    let created = service(repo)
        .create_employee(request)
        .await
        .expect("create succeeds");

    assert_eq!(created.id, Some(EmployeeId::new(1)));
    assert_eq!(created.first_name, "Jane");
}

#[rstest]
#[tokio::test]
async fn create_propagates_repository_failure(jane: EmployeeDto) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::connection("down")));

    let err = service(repo)
        .create_employee(jane)
        .await
        .expect_err("create fails");

    assert!(matches!(err, EmployeeServiceError::Repository(_)));
}

#[tokio::test]
async fn get_returns_not_found_for_absent_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let err = service(repo)
        .get_employee_by_id(EmployeeId::new(999_999))
        .await
        .expect_err("lookup fails");

    assert_eq!(err, EmployeeServiceError::not_found(EmployeeId::new(999_999)));
}

#[tokio::test]
async fn get_all_maps_every_record() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Ok(vec![stored(1, "Jane"), stored(2, "John")]));

    let all = service(repo).get_all_employees().await.expect("list succeeds");

    let names: Vec<_> = all.iter().map(|dto| dto.first_name.as_str()).collect();
    assert_eq!(names, ["Jane", "John"]);
}

#[tokio::test]
async fn get_all_is_empty_without_rows() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let all = service(repo).get_all_employees().await.expect("list succeeds");

    assert!(all.is_empty());
}

#[rstest]
#[tokio::test]
async fn update_keeps_path_id_and_replaces_fields(jane: EmployeeDto) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored(1, "Jane"))));
    repo.expect_save()
        .withf(|record| record.id == Some(EmployeeId::new(1)) && record.first_name == "Janet")
        .times(1)
        .return_once(Ok);

    let request = EmployeeDto {
        id: Some(EmployeeId::new(5)),
        first_name: "Janet".to_owned(),
        ..jane
    };
    let updated = service(repo)
        .update_employee(EmployeeId::new(1), request)
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, Some(EmployeeId::new(1)));
    assert_eq!(updated.first_name, "Janet");
}

#[rstest]
#[tokio::test]
async fn update_of_absent_id_never_saves(jane: EmployeeDto) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_save().never();

    let err = service(repo)
        .update_employee(EmployeeId::new(3), jane)
        .await
        .expect_err("update fails");

    assert_eq!(err, EmployeeServiceError::not_found(EmployeeId::new(3)));
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_when_row_vanishes(jane: EmployeeDto) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored(4, "Jane"))));
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::missing(EmployeeId::new(4))));

    let err = service(repo)
        .update_employee(EmployeeId::new(4), jane)
        .await
        .expect_err("update fails");

    assert_eq!(err, EmployeeServiceError::not_found(EmployeeId::new(4)));
}

#[rstest]
#[case(true, None)]
#[case(false, Some(EmployeeServiceError::not_found(EmployeeId::new(8))))]
#[tokio::test]
async fn delete_reports_outcome(
    #[case] removed: bool,
    #[case] expected_error: Option<EmployeeServiceError>,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete_by_id()
        .withf(|id| *id == EmployeeId::new(8))
        .times(1)
        .return_once(move |_| Ok(removed));

    let outcome = service(repo).delete_employee(EmployeeId::new(8)).await;

    assert_eq!(outcome.err(), expected_error);
}
