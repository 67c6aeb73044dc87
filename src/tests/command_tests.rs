use crate::commands::generate::validate_batch_count;
use crate::error::PanelError;

#[test]
fn test_batch_count_bounds() {
    assert_eq!(validate_batch_count(1).expect("lower bound"), 1);
    assert_eq!(validate_batch_count(1000).expect("upper bound"), 1000);
    assert_eq!(validate_batch_count(50).expect("in range"), 50);
}

#[test]
fn test_batch_count_zero_rejected() {
    match validate_batch_count(0) {
        Err(PanelError::InvalidInput(msg)) => {
            assert!(msg.contains("between 1 and 1000"));
        }
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_batch_count_over_limit_rejected() {
    assert!(matches!(
        validate_batch_count(1001),
        Err(PanelError::InvalidInput(_))
    ));
}
