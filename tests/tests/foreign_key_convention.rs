use relmap::resolve::KeyNaming;
use relmap::{DefaultForeignKeyResolver, ForeignKeyRelation, ForeignKeyResolver, Mapper};
use tests::*;

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Order {
    #[relmap(rename = "Id")]
    id: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct OrderLine {
    #[relmap(rename = "Id")]
    id: i64,

    #[relmap(rename = "OrderId")]
    order_id: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Product {
    #[relmap(rename = "Id")]
    id: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Category {
    #[relmap(rename = "Id")]
    id: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Shipment {
    id: i64,
    order_id: i64,

    #[relmap(rename = "orderId")]
    legacy_order_id: i64,
}

#[test]
fn order_line_to_order_is_one_to_one() {
    init_tracing();

    let foreign_key = assert_ok!(Mapper::default().foreign_key::<OrderLine, Order>());
    assert_eq!(foreign_key.field.name, "OrderId");
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToOne);
}

#[test]
fn order_to_order_line_is_one_to_many() {
    init_tracing();

    let (order, order_line) = models!(Order, OrderLine);
    let resolved = assert_ok!(DefaultForeignKeyResolver::new().resolve(&order, &order_line));

    assert_eq!(resolved.field.name, "OrderId");
    assert_eq!(resolved.relation, ForeignKeyRelation::OneToMany);
    assert!(std::ptr::eq(resolved.field, order_line.field(1)));
}

#[test]
fn product_and_category_are_unrelated() {
    init_tracing();

    let err = assert_err!(Mapper::default().foreign_key::<Product, Category>());
    assert!(err.is_foreign_key_not_resolved());

    let msg = err.to_string();
    assert!(msg.contains("foreign_key_convention::Product"), "{msg}");
    assert!(msg.contains("foreign_key_convention::Category"), "{msg}");
}

#[test]
fn lowercase_key_does_not_match() {
    init_tracing();

    // `Shipment` only has `order_id` and `orderId`.
    let err = assert_err!(Mapper::default().foreign_key::<Shipment, Order>());
    assert!(err.is_foreign_key_not_resolved());
}

#[test]
fn snake_naming_matches_rust_identifiers() {
    init_tracing();

    let mapper = Mapper::builder()
        .foreign_key_resolver(
            DefaultForeignKeyResolver::builder()
                .key_naming(KeyNaming::Snake)
                .build(),
        )
        .build();

    let foreign_key = assert_ok!(mapper.foreign_key::<Shipment, Order>());
    assert_eq!(foreign_key.field.name, "order_id");
    assert_eq!(foreign_key.field.index, 1);
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToOne);

    let foreign_key = assert_ok!(mapper.foreign_key::<Order, Shipment>());
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToMany);
}

#[test]
fn key_value_follows_relation() {
    init_tracing();

    let order = Order { id: 12 };
    let line = OrderLine { id: 1, order_id: 12 };
    let mapper = Mapper::default();

    assert_eq!(
        assert_ok!(mapper.key_value(&line, &order)),
        relmap::stmt::Value::I64(12)
    );
    assert_eq!(
        assert_ok!(mapper.key_value(&order, &line)),
        relmap::stmt::Value::I64(12)
    );
}
