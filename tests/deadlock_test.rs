/*!
 * Deadlock Detection Tests
 * Safety-check verdicts over static allocation snapshots
 */

use pretty_assertions::assert_eq;
use schedsim::{detect_deadlock, DeadlockDetector, DeadlockInput, InvalidArgument, ResourceSnapshot};

fn textbook_allocation() -> Vec<Vec<u32>> {
    vec![
        vec![0, 1, 0],
        vec![2, 0, 0],
        vec![3, 0, 2],
        vec![2, 1, 1],
        vec![0, 0, 2],
    ]
}

fn textbook_request() -> Vec<Vec<u32>> {
    vec![
        vec![0, 0, 0],
        vec![2, 0, 2],
        vec![0, 0, 0],
        vec![1, 0, 0],
        vec![0, 0, 2],
    ]
}

#[test]
fn test_textbook_snapshot_unwinds() {
    // P0 and P2 request nothing, so their releases unblock everyone else
    let snapshot =
        ResourceSnapshot::new(&textbook_allocation(), &textbook_request(), &[0, 0, 0]).unwrap();
    let report = DeadlockDetector::new().analyze(&snapshot);

    assert!(!report.deadlocked);
    assert_eq!(report.completion_order, vec![0, 2, 3, 4, 1]);
}

#[test]
fn test_one_extra_request_deadlocks() {
    let mut request = textbook_request();
    request[2] = vec![0, 0, 1];

    assert!(detect_deadlock(&textbook_allocation(), &request, &[0, 0, 0]).unwrap());

    let snapshot = ResourceSnapshot::new(&textbook_allocation(), &request, &[0, 0, 0]).unwrap();
    let report = DeadlockDetector::new().analyze(&snapshot);
    assert_eq!(report.blocked, vec![1, 2, 3, 4]);
}

#[test]
fn test_nobody_can_start() {
    let allocation = vec![vec![1, 0], vec![0, 1], vec![1, 1]];
    let request = vec![vec![0, 1], vec![1, 0], vec![1, 1]];
    assert!(detect_deadlock(&allocation, &request, &[0, 0]).unwrap());
}

#[test]
fn test_available_covering_every_request() {
    let mut request = textbook_request();
    request[2] = vec![0, 0, 1];
    // column-wise maximum of the requests
    let available = [2, 0, 2];

    assert!(!detect_deadlock(&textbook_allocation(), &request, &available).unwrap());
}

#[test]
fn test_verdict_independent_of_row_order() {
    let mut allocation = textbook_allocation();
    let mut request = textbook_request();
    request[2] = vec![0, 0, 1];
    allocation.reverse();
    request.reverse();

    assert!(detect_deadlock(&allocation, &request, &[0, 0, 0]).unwrap());
}

#[test]
fn test_inputs_are_not_mutated() {
    let allocation = textbook_allocation();
    let request = textbook_request();
    let available = vec![0, 0, 0];

    detect_deadlock(&allocation, &request, &available).unwrap();

    assert_eq!(allocation, textbook_allocation());
    assert_eq!(request, textbook_request());
    assert_eq!(available, vec![0, 0, 0]);
}

#[test]
fn test_malformed_shapes() {
    let short_available = detect_deadlock(&textbook_allocation(), &textbook_request(), &[0, 0]);
    assert!(matches!(
        short_available,
        Err(InvalidArgument::RaggedMatrix { .. })
    ));

    let missing_row = detect_deadlock(&textbook_allocation(), &textbook_request()[..4], &[0, 0, 0]);
    assert_eq!(
        missing_row.unwrap_err(),
        InvalidArgument::MatrixShapeMismatch {
            expected_rows: 5,
            actual_rows: 4
        }
    );

    let mut ragged = textbook_request();
    ragged[3].push(7);
    let err = detect_deadlock(&textbook_allocation(), &ragged, &[0, 0, 0]).unwrap_err();
    assert_eq!(
        err,
        InvalidArgument::RaggedMatrix {
            matrix: "request".to_string(),
            row: 3,
            expected: 3,
            actual: 4,
        }
    );
}

#[test]
fn test_input_from_json() {
    let input: DeadlockInput = serde_json::from_str(
        r#"{
            "allocation": [[1, 0], [0, 1]],
            "request": [[0, 1], [1, 0]],
            "available": [0, 0]
        }"#,
    )
    .unwrap();

    let snapshot = input.snapshot().unwrap();
    assert!(DeadlockDetector::new().detect(&snapshot));
}
