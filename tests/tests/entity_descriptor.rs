use pretty_assertions::assert_eq;
use relmap::stmt::Type;
use tests::*;

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Customer {
    id: i64,

    #[relmap(rename = "DisplayName")]
    name: String,

    nickname: Option<String>,

    token: uuid::Uuid,

    #[relmap(references = Account)]
    billing_account: u64,

    #[relmap(skip)]
    orders: Vec<i64>,

    active: bool,
    score: i32,
}

#[test]
fn name_and_path() {
    let model = <Customer as relmap::Entity>::model();

    assert_eq!(model.name.as_str(), "Customer");
    assert_eq!(model.path, "entity_descriptor::Customer");
}

#[test]
fn fields_in_declaration_order() {
    let (model,) = models!(Customer);

    let fields: Vec<_> = model
        .fields()
        .iter()
        .map(|field| (field.index, field.name.as_str(), field.ty.clone(), field.nullable))
        .collect();

    assert_eq!(
        fields,
        vec![
            (0, "id", Type::I64, false),
            (1, "DisplayName", Type::String, false),
            (2, "nickname", Type::String, true),
            (3, "token", Type::Uuid, false),
            (4, "billing_account", Type::U64, false),
            (5, "active", Type::Bool, false),
            (6, "score", Type::I32, false),
        ]
    );
}

#[test]
fn declared_references() {
    let (model,) = models!(Customer);

    let referencing: Vec<_> = model
        .fields_referencing("Account")
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(referencing, vec!["billing_account"]);
    assert_eq!(model.field_by_name("id").unwrap().references, None);
}

#[test]
fn every_field_has_an_accessor() {
    let (model,) = models!(Customer);
    assert!(model.fields().iter().all(|field| field.accessor.is_some()));
}

#[test]
fn descriptors_are_built_fresh() {
    let (a, b) = models!(Customer, Customer);
    assert!(!std::ptr::eq(&a.fields[0], &b.fields[0]));
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct r#Match {
    id: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Game {
    r#type: String,

    #[relmap(rename = "MatchId")]
    match_id: i64,

    #[relmap(references = r#Match)]
    rematch_of: Option<i64>,
}

#[test]
fn raw_identifiers_are_unescaped() {
    let (matches, game) = models!(r#Match, Game);

    assert_eq!(matches.name.as_str(), "Match");
    assert_eq!(matches.path, "entity_descriptor::Match");
    assert_eq!(game.fields[0].name, "type");
    assert_eq!(game.fields[2].references.as_deref(), Some("Match"));
}

#[test]
fn raw_identifier_type_resolves_by_convention() {
    let foreign_key = assert_ok!(relmap::Mapper::default().foreign_key::<Game, r#Match>());
    assert_eq!(foreign_key.field.name, "MatchId");
    assert_eq!(foreign_key.relation, relmap::ForeignKeyRelation::OneToOne);
}
