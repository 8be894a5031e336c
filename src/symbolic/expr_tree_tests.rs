/////////////////////////////TESTS////////////////////////////////////////////////////
/*
decoding of well-formed nodes of every kind
fallback to Unknown for malformed nodes
rendering rules for every node kind
parenthesization of nested operators
*/

#[cfg(test)]
mod tests {
    use crate::symbolic::expr_render::{UNKNOWN_PLACEHOLDER, render};
    use crate::symbolic::expr_tree::Node;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from_json(&value)
    }

    #[test]
    fn test_decode_every_kind() {
        assert_eq!(node(json!({"type": "var", "name": "x"})), Node::var("x"));
        assert_eq!(node(json!({"type": "dep", "name": "u"})), Node::dep("u"));
        assert_eq!(node(json!({"type": "param", "name": "nu"})), Node::param("nu"));
        assert_eq!(node(json!({"type": "const", "value": -1})), Node::int(-1));
        assert_eq!(
            node(json!({"type": "deriv", "dep": "u", "wrt": "t", "order": 2})),
            Node::deriv("u", "t", 2)
        );
        assert_eq!(
            node(json!({"type": "fn", "name": "u0", "args": [{"type": "var", "name": "x"}]})),
            Node::func("u0", vec![Node::var("x")])
        );
        assert_eq!(
            node(json!({"type": "op", "op": "+", "args": [
                {"type": "const", "value": 0},
                {"type": "const", "value": 1}
            ]})),
            Node::int(0) + Node::int(1)
        );
    }

    #[test]
    fn test_decode_defaults() {
        // order defaults to 1, args to nothing
        assert_eq!(
            node(json!({"type": "deriv", "dep": "u", "wrt": "x"})),
            Node::deriv("u", "x", 1)
        );
        assert_eq!(
            node(json!({"type": "deriv", "dep": "u", "wrt": "x", "order": 2.0})),
            Node::deriv("u", "x", 2)
        );
        assert_eq!(node(json!({"type": "fn", "name": "f"})), Node::func("f", vec![]));
        assert_eq!(node(json!({"type": "op", "op": "max"})), Node::op("max", vec![]));
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(
            node(json!({"type": "mystery"})),
            Node::Unknown {
                tag: Some("mystery".to_string())
            }
        );
        assert_eq!(node(json!({"name": "x"})), Node::Unknown { tag: None });
        assert_eq!(node(json!(42)), Node::Unknown { tag: None });
        assert_eq!(node(json!("x")), Node::Unknown { tag: None });
        assert!(node(json!({"type": "var"})).is_unknown());
        assert!(node(json!({"type": "const", "value": "L"})).is_unknown());
        assert!(node(json!({"type": "deriv", "dep": "u", "wrt": "x", "order": 0})).is_unknown());
        assert!(node(json!({"type": "deriv", "dep": "u", "wrt": "x", "order": 1.5})).is_unknown());
        assert!(node(json!({"type": "deriv", "dep": "u", "order": 1})).is_unknown());
        assert!(node(json!({"type": "op", "args": []})).is_unknown());
    }

    #[test]
    fn test_malformed_argument_stays_local() {
        let tree = node(json!({"type": "op", "op": "+", "args": [
            {"type": "dep", "name": "u"},
            {"type": "mystery"}
        ]}));
        assert_eq!(render(&tree), "(u + <?>)");
    }

    #[test]
    fn test_to_json_keeps_shape() {
        let tree = Node::param("nu") * (Node::deriv("u", "x", 2) + Node::deriv("u", "y", 2));
        let encoded = tree.to_json();
        assert_eq!(encoded["type"], "op");
        assert_eq!(encoded["op"], "*");
        assert_eq!(encoded["args"][1]["args"][0]["order"], 2);
        assert_eq!(Node::from_json(&encoded), tree);
        assert_eq!(
            Node::Unknown {
                tag: Some("mystery".to_string())
            }
            .to_json(),
            json!({"type": "mystery"})
        );
    }

    #[test]
    fn test_serde_delegates_to_json() {
        let tree: Node =
            serde_json::from_str(r#"{"type": "fn", "name": "sin", "args": [{"type": "var", "name": "x"}]}"#)
                .unwrap();
        assert_eq!(tree, Node::func("sin", vec![Node::var("x")]));
        let nodes: Vec<Node> = serde_json::from_str(r#"[{"type": "mystery"}, 3]"#).unwrap();
        assert!(nodes.iter().all(Node::is_unknown));
        let text = serde_json::to_string(&Node::var("x")).unwrap();
        assert_eq!(text, r#"{"type":"var","name":"x"}"#);
    }

    #[test]
    fn test_dependents() {
        let tree = Node::dep("u") * Node::deriv("u", "x", 1)
            + Node::dep("v") * Node::deriv("p", "y", 1)
            + Node::param("nu") * Node::var("x");
        assert_eq!(tree.dependents(), vec!["u", "v", "p"]);
    }

    #[test]
    fn test_render_leaves() {
        assert_eq!(render(&node(json!({"type": "const", "value": 3.5}))), "3.5");
        assert_eq!(render(&node(json!({"type": "const", "value": 0}))), "0");
        assert_eq!(render(&node(json!({"type": "const", "value": 0.0}))), "0.0");
        assert_eq!(render(&Node::int(-1)), "-1");
        assert_eq!(render(&Node::float(3.5)), "3.5");
        // exponent form follows serde_json, not Python's str
        assert_eq!(render(&Node::float(1e20)), "1e20");
        assert_eq!(render(&Node::var("x")), "x");
        assert_eq!(render(&Node::dep("u")), "u");
        assert_eq!(render(&Node::param("nu")), "nu");
    }

    #[test]
    fn test_render_derivatives() {
        assert_eq!(render(&Node::deriv("u", "x", 1)), "∂u/∂x");
        assert_eq!(render(&Node::deriv("u", "x", 2)), "∂^2u/∂x^2");
        assert_eq!(render(&Node::deriv("phi", "t", 4)), "∂^4phi/∂t^4");
    }

    #[test]
    fn test_render_binary_operators() {
        let product = Node::dep("u") * Node::deriv("u", "x", 1);
        assert_eq!(render(&product), "(u ∂u/∂x)");
        assert_eq!(render(&(Node::int(0) + Node::int(0))), "(0 + 0)");
        assert_eq!(render(&(Node::var("x") - Node::int(1))), "(x - 1)");
        assert_eq!(render(&(Node::var("x") / Node::param("L"))), "(x / L)");
        assert_eq!(
            render(&Node::op("^", vec![Node::param("c"), Node::int(2)])),
            "(c^2)"
        );
    }

    #[test]
    fn test_render_generic_operators() {
        // arity other than two is always generic, whatever the symbol
        assert_eq!(render(&Node::op("-", vec![Node::dep("u")])), "-(u)");
        assert_eq!(
            render(&Node::op("+", vec![Node::int(1), Node::int(2), Node::int(3)])),
            "+(1, 2, 3)"
        );
        assert_eq!(render(&Node::op("*", vec![])), "*()");
        // unrecognised symbol with two arguments
        assert_eq!(
            render(&Node::op("max", vec![Node::dep("u"), Node::int(0)])),
            "max(u, 0)"
        );
        assert_eq!(
            render(&Node::op("laplacian", vec![Node::dep("u")])),
            "laplacian(u)"
        );
    }

    #[test]
    fn test_render_functions() {
        let u0 = Node::func("u0", vec![Node::var("x"), Node::var("y")]);
        assert_eq!(render(&u0), "u0(x, y)");
        assert_eq!(render(&Node::func("g", vec![])), "g()");
        assert_eq!(
            render(&Node::func("sin", vec![Node::param("k") * Node::var("x")])),
            "sin((k x))"
        );
    }

    #[test]
    fn test_render_nested() {
        let lhs = Node::deriv("u", "t", 1)
            + (Node::dep("u") * Node::deriv("u", "x", 1) + Node::dep("v") * Node::deriv("u", "y", 1));
        assert_eq!(render(&lhs), "(∂u/∂t + ((u ∂u/∂x) + (v ∂u/∂y)))");
        let rhs = Node::int(-1) * Node::deriv("p", "x", 1)
            + Node::param("nu") * (Node::deriv("u", "x", 2) + Node::deriv("u", "y", 2));
        assert_eq!(render(&rhs), "((-1 ∂p/∂x) + (nu (∂^2u/∂x^2 + ∂^2u/∂y^2)))");
    }

    #[test]
    fn test_render_unknown() {
        assert_eq!(render(&node(json!({"type": "mystery"}))), UNKNOWN_PLACEHOLDER);
        assert_eq!(render(&node(json!(null))), "<?>");
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = Node::func("f", vec![Node::op("^", vec![Node::var("x"), Node::int(2)])]);
        let first = render(&tree);
        let second = render(&tree);
        assert_eq!(first, second);
        assert_eq!(first, tree.to_string());
    }
}
