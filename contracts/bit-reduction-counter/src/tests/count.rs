use crate::interface::CountResponse;
use crate::msg::QueryMsg;
use crate::tests::helper::{macros::*, AttributeUtil, MockApp};

#[test]
fn test_query_count() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 64);

    assert_eq!(app.query_count(counter.as_str(), "1").unwrap(), 1);
    assert_eq!(app.query_count(counter.as_str(), "10").unwrap(), 2);
    assert_eq!(app.query_count(counter.as_str(), "11").unwrap(), 3);
    assert_eq!(app.query_count(counter.as_str(), "100000").unwrap(), 6);
}

#[test]
fn test_query_count_echoes_input() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 64);

    let res: CountResponse = app
        .query(
            counter,
            &QueryMsg::Count {
                bits: "00101".to_string(),
            },
        )
        .unwrap();
    assert_eq!(
        res,
        CountResponse {
            bits: "00101".to_string(),
            operations: 4,
        }
    );
}

#[test]
fn test_query_count_invalid_input() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 64);

    let err = app.query_count(counter.as_str(), "000").unwrap_err();
    assert!(err.to_string().contains("no set bit in bit string"));

    let err = app.query_count(counter.as_str(), "").unwrap_err();
    assert!(err.to_string().contains("empty bit string"));

    let err = app.query_count(counter.as_str(), "12").unwrap_err();
    assert!(err.to_string().contains("invalid character '2' at index 1"));
}

#[test]
fn test_query_count_too_long() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 4);

    assert_eq!(app.query_count(counter.as_str(), "1111").unwrap(), 7);

    let err = app.query_count(counter.as_str(), "11111").unwrap_err();
    assert!(err
        .to_string()
        .contains("input of 5 bits exceeds max_bits 4"));
}

#[test]
fn test_query_count_batch() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 64);

    let res: Vec<CountResponse> = app
        .query(
            counter.clone(),
            &QueryMsg::CountBatch {
                inputs: vec!["1".to_string(), "111".to_string(), "1000".to_string()],
            },
        )
        .unwrap();
    let operations: Vec<u64> = res.iter().map(|r| r.operations).collect();
    assert_eq!(operations, vec![1, 5, 4]);

    let empty: Vec<CountResponse> = app
        .query(counter.clone(), &QueryMsg::CountBatch { inputs: vec![] })
        .unwrap();
    assert!(empty.is_empty());

    let err = app
        .query::<Vec<CountResponse>, _>(
            counter,
            &QueryMsg::CountBatch {
                inputs: vec!["1".to_string(), "0".to_string()],
            },
        )
        .unwrap_err();
    assert!(err.to_string().contains("no set bit in bit string"));
}

#[test]
fn test_execute_count_records_result() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 64);

    let recorded: Option<u64> = app
        .query(
            counter.clone(),
            &QueryMsg::Recorded {
                bits: "0110".to_string(),
            },
        )
        .unwrap();
    assert_eq!(recorded, None);

    let res = count!(app, counter, "0110", "bob").unwrap();
    assert_eq!(res.get_attribute("action"), Some("count".to_string()));
    assert_eq!(res.get_attribute("bits"), Some("0110".to_string()));
    assert_eq!(res.get_attribute("leading_bit"), Some("1".to_string()));
    assert_eq!(res.get_attribute("operations"), Some("4".to_string()));

    let recorded: Option<u64> = app
        .query(
            counter.clone(),
            &QueryMsg::Recorded {
                bits: "0110".to_string(),
            },
        )
        .unwrap();
    assert_eq!(recorded, Some(4));

    // recorded under the input as given
    let recorded: Option<u64> = app
        .query(
            counter,
            &QueryMsg::Recorded {
                bits: "110".to_string(),
            },
        )
        .unwrap();
    assert_eq!(recorded, None);
}

#[test]
fn test_execute_count_invalid_input() {
    let mut app = MockApp::new();
    let counter = create_counter!(app, 8);

    let err = count!(app, counter, "0000").unwrap_err();
    assert!(err.contains("error executing WasmMsg"));
    assert!(err.contains("no set bit in bit string"));

    let err = count!(app, counter, "101010101").unwrap_err();
    assert!(err.contains("input of 9 bits exceeds max_bits 8"));

    let recorded: Option<u64> = app
        .query(
            counter,
            &QueryMsg::Recorded {
                bits: "0000".to_string(),
            },
        )
        .unwrap();
    assert_eq!(recorded, None);
}
