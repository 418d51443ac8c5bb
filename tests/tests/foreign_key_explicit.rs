use relmap::{ExplicitForeignKeyResolver, ForeignKeyRelation, Mapper};
use tests::*;

mod crm {
    #[allow(dead_code)]
    #[derive(Debug, relmap::Entity)]
    pub struct Company {
        pub id: i64,
    }
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Contact {
    id: i64,

    #[relmap(references = crm::Company)]
    employer: Option<i64>,

    #[relmap(rename = "CompanyId")]
    former_company: i64,
}

#[allow(dead_code)]
#[derive(Debug, relmap::Entity)]
struct Note {
    id: i64,

    #[relmap(rename = "ContactId")]
    contact: i64,
}

fn mapper() -> Mapper {
    Mapper::builder()
        .foreign_key_resolver(ExplicitForeignKeyResolver::new())
        .build()
}

#[test]
fn declared_reference_wins_over_convention() {
    init_tracing();

    let foreign_key = assert_ok!(mapper().foreign_key::<Contact, crm::Company>());
    assert_eq!(foreign_key.field.name, "employer");
    assert!(foreign_key.field.nullable);
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToOne);

    // The default mapper only sees the conventional name.
    let foreign_key = assert_ok!(Mapper::default().foreign_key::<Contact, crm::Company>());
    assert_eq!(foreign_key.field.name, "CompanyId");
}

#[test]
fn declared_reference_on_including_type() {
    init_tracing();

    let foreign_key = assert_ok!(mapper().foreign_key::<crm::Company, Contact>());
    assert_eq!(foreign_key.field.name, "employer");
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToMany);
}

#[test]
fn undeclared_pair_uses_convention() {
    init_tracing();

    let foreign_key = assert_ok!(mapper().foreign_key::<Contact, Note>());
    assert_eq!(foreign_key.field.name, "ContactId");
    assert_eq!(foreign_key.relation, ForeignKeyRelation::OneToMany);
}

#[test]
fn unrelated_pair_fails() {
    init_tracing();

    let err = assert_err!(mapper().foreign_key::<Note, crm::Company>());
    assert!(err.is_foreign_key_not_resolved());
    assert!(err.to_string().contains("foreign_key_explicit::Note"));
    assert!(err.to_string().contains("foreign_key_explicit::crm::Company"));
}
