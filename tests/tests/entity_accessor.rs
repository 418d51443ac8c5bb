use relmap::stmt::Value;
use tests::*;

#[derive(Debug, Clone, PartialEq, relmap::Entity)]
struct Ticket {
    id: i64,
    title: String,
    assignee: Option<u64>,
    public_id: uuid::Uuid,
}

fn ticket() -> Ticket {
    Ticket {
        id: 1,
        title: "Broken build".to_string(),
        assignee: None,
        public_id: uuid::Uuid::nil(),
    }
}

#[test]
fn get_reads_each_field() {
    let (model,) = models!(Ticket);
    let ticket = ticket();

    let values: Vec<_> = model
        .fields()
        .iter()
        .map(|field| assert_ok!(field.get(&ticket)))
        .collect();

    assert_eq!(
        values,
        vec![
            Value::I64(1),
            Value::String("Broken build".to_string()),
            Value::Null,
            Value::Uuid(uuid::Uuid::nil()),
        ]
    );
}

#[test]
fn set_writes_field() {
    let (model,) = models!(Ticket);
    let mut ticket = ticket();

    let assignee = model.field_by_name("assignee").unwrap();
    assert_ok!(assignee.set(&mut ticket, Value::U64(42)));
    assert_eq!(ticket.assignee, Some(42));

    assert_ok!(assignee.set(&mut ticket, Value::Null));
    assert_eq!(ticket.assignee, None);

    let public_id = uuid::Uuid::new_v4();
    let field = model.field_by_name("public_id").unwrap();
    assert_ok!(field.set(&mut ticket, Value::Uuid(public_id)));
    assert_eq!(ticket.public_id, public_id);
}

#[test]
fn set_rejects_mismatched_value() {
    let (model,) = models!(Ticket);
    let mut ticket = ticket();
    let before = ticket.clone();

    let title = model.field_by_name("title").unwrap();
    let err = assert_err!(title.set(&mut ticket, Value::I64(5)));
    assert!(err.is_type_conversion());

    let id = model.field_by_name("id").unwrap();
    let err = assert_err!(id.set(&mut ticket, Value::Null));
    assert_eq!(err.to_string(), "field `id` is not nullable");

    assert_eq!(ticket, before);
}

#[test]
fn accessor_rejects_other_record_types() {
    let (model,) = models!(Ticket);

    let err = assert_err!(model.field(0).get(&"not a ticket"));
    assert!(err.to_string().contains("Ticket"), "{err}");
}
