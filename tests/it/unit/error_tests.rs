//! Unit tests for the error taxonomy.

use flowcanvas::types::{ConnectionId, NodeId};
use flowcanvas::{GraphError, NotFoundError, ValidationError};

#[test]
fn test_validation_messages() {
    insta::assert_snapshot!(
        ValidationError::UnknownNodeKind("teleport".to_string()).to_string(),
        @r#"unknown node kind: "teleport""#
    );
    insta::assert_snapshot!(
        ValidationError::MissingEndpoint(NodeId(42)).to_string(),
        @"connection endpoint n42 does not exist"
    );
    insta::assert_snapshot!(
        ValidationError::SelfLoop(NodeId(3)).to_string(),
        @"self-loop connections are not allowed (node n3)"
    );
    insta::assert_snapshot!(
        ValidationError::DuplicateConnection {
            source: NodeId(1),
            target: NodeId(2),
        }
        .to_string(),
        @"duplicate connection n1 -> n2"
    );
}

#[test]
fn test_not_found_messages() {
    insta::assert_snapshot!(
        NotFoundError::Node(NodeId(9)).to_string(),
        @"node not found: n9"
    );
    insta::assert_snapshot!(
        NotFoundError::Connection(ConnectionId(4)).to_string(),
        @"connection not found: c4"
    );
}

#[test]
fn test_transparent_wrapping_keeps_messages() {
    let err: GraphError = ValidationError::SelfLoop(NodeId(1)).into();
    assert_eq!(err.to_string(), "self-loop connections are not allowed (node n1)");
    assert!(err.is_validation());
    assert!(!err.is_not_found());

    let err: GraphError = NotFoundError::Node(NodeId(1)).into();
    assert_eq!(err.to_string(), "node not found: n1");
    assert!(err.is_not_found());
}
