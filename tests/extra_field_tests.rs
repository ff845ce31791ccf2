use calevent::errors::{AppError, AppResult};
use calevent::forms::{
    CleanedData, ExtraFormField, ExtraFormFields, FieldSpec, FieldValue, Form, FormData, Initial,
    ProcessContext,
};
use calevent::routes::Identifier;
use calevent::views::{CreateView, Model, UpdateView};
use rusqlite::{Connection, OptionalExtension, params};

mod common;
use common::open_test_db;

/// A model with a single `name` column stored in `$table`, whose create and
/// update views get `$extras` as extra form fields.
macro_rules! test_model {
    ($ty:ident, $table:literal, $extras:expr) => {
        #[derive(Debug, Clone, PartialEq)]
        struct $ty {
            id: Option<i64>,
            name: String,
        }

        impl $ty {
            fn create_table(conn: &Connection) {
                conn.execute_batch(concat!(
                    "CREATE TABLE ",
                    $table,
                    " (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);"
                ))
                .unwrap();
            }

            fn count(conn: &Connection) -> i64 {
                conn.query_row(concat!("SELECT COUNT(*) FROM ", $table), [], |r| r.get(0))
                    .unwrap()
            }
        }

        impl Model for $ty {
            const MODEL_NAME: &'static str = stringify!($ty);

            fn pk(&self) -> Option<i64> {
                self.id
            }

            fn form() -> Form {
                Form::new().with_field("name", FieldSpec::text())
            }

            fn initial(&self) -> Initial {
                Initial::from([("name".to_string(), FieldValue::from(self.name.as_str()))])
            }

            fn from_cleaned(data: &CleanedData) -> AppResult<Self> {
                Ok(Self {
                    id: None,
                    name: data.text("name").to_string(),
                })
            }

            fn apply_cleaned(&mut self, data: &CleanedData) -> AppResult<()> {
                self.name = data.text("name").to_string();
                Ok(())
            }

            fn save(&mut self, conn: &Connection) -> AppResult<()> {
                match self.id {
                    Some(id) => {
                        conn.execute(
                            concat!("UPDATE ", $table, " SET name = ?1 WHERE id = ?2"),
                            params![self.name, id],
                        )?;
                    }
                    None => {
                        conn.execute(
                            concat!("INSERT INTO ", $table, " (name) VALUES (?1)"),
                            [&self.name],
                        )?;
                        self.id = Some(conn.last_insert_rowid());
                    }
                }
                Ok(())
            }

            fn delete(&self, conn: &Connection) -> AppResult<bool> {
                Ok(conn.execute(concat!("DELETE FROM ", $table, " WHERE id = ?1"), [self.id])? > 0)
            }

            fn get(conn: &Connection, identifier: &Identifier) -> AppResult<Option<Self>> {
                let Identifier::Pk(id) = identifier else {
                    return Ok(None);
                };
                Ok(conn
                    .query_row(
                        concat!("SELECT id, name FROM ", $table, " WHERE id = ?1"),
                        [id],
                        |r| {
                            Ok(Self {
                                id: Some(r.get(0)?),
                                name: r.get(1)?,
                            })
                        },
                    )
                    .optional()?)
            }

            fn all(conn: &Connection) -> AppResult<Vec<Self>> {
                let mut stmt = conn.prepare(concat!("SELECT id, name FROM ", $table, " ORDER BY id"))?;
                let rows = stmt.query_map([], |r| {
                    Ok(Self {
                        id: Some(r.get(0)?),
                        name: r.get(1)?,
                    })
                })?;
                Ok(rows.collect::<Result<_, _>>()?)
            }

            fn extra_form_fields() -> ExtraFormFields<Self> {
                $extras
            }
        }
    };
}

// Extra field 1 takes a string, extra field 2 an integer: the string is
// appended to the name as often as the integer says.
struct ExtraOne;
struct ExtraTwo;

impl ExtraFormField<ModelE> for ExtraOne {
    fn name(&self) -> Option<&str> {
        Some("extra_1")
    }

    fn form_field(&self) -> Option<FieldSpec> {
        Some(FieldSpec::char())
    }

    fn get_initial(&self, _conn: &Connection, instance: Option<&ModelE>) -> AppResult<FieldValue> {
        let suffix = instance
            .and_then(|i| i.name.rsplit('_').next())
            .unwrap_or("");
        Ok(FieldValue::from(suffix))
    }

    fn process_field(
        &self,
        ctx: &mut ProcessContext<'_>,
        _instance: &mut ModelE,
        value: &FieldValue,
    ) -> AppResult<()> {
        ctx.stash.insert("extra_1".into(), value.clone());
        Ok(())
    }
}

impl ExtraFormField<ModelE> for ExtraTwo {
    fn name(&self) -> Option<&str> {
        Some("extra_2")
    }

    fn form_field(&self) -> Option<FieldSpec> {
        Some(FieldSpec::integer())
    }

    fn initial(&self) -> FieldValue {
        FieldValue::Integer(1)
    }

    fn process_field(
        &self,
        ctx: &mut ProcessContext<'_>,
        instance: &mut ModelE,
        value: &FieldValue,
    ) -> AppResult<()> {
        let suffix = ctx
            .stash
            .get("extra_1")
            .and_then(FieldValue::as_str)
            .unwrap_or("")
            .to_string();
        for _ in 0..value.as_integer().unwrap_or(0) {
            instance.name.push('_');
            instance.name.push_str(&suffix);
        }
        instance.save(ctx.conn)
    }
}

test_model!(ModelE, "test_model_e", vec![Box::new(ExtraOne), Box::new(ExtraTwo)]);

// Bad descriptors: no name, no form field, no process_field.
struct Nameless;
struct Formless;
struct Unprocessed;

impl ExtraFormField<ModelF1> for Nameless {}

impl ExtraFormField<ModelF2> for Formless {
    fn name(&self) -> Option<&str> {
        Some("formless")
    }
}

impl ExtraFormField<ModelF3> for Unprocessed {
    fn name(&self) -> Option<&str> {
        Some("unprocessed")
    }

    fn form_field(&self) -> Option<FieldSpec> {
        Some(FieldSpec::char().optional())
    }
}

test_model!(ModelF1, "test_model_f1", vec![Box::new(Nameless)]);
test_model!(ModelF2, "test_model_f2", vec![Box::new(Formless)]);
test_model!(ModelF3, "test_model_f3", vec![Box::new(Unprocessed)]);
test_model!(ModelG, "test_model_g", Vec::new());

fn form_data(pairs: &[(&str, &str)]) -> FormData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_create_view() {
    let pool = open_test_db("extra_create_view");
    ModelE::create_table(&pool.conn);

    let object = CreateView::<ModelE>::new()
        .post(
            &pool.conn,
            &form_data(&[
                ("name", "GaaTooghi9ieMu2oopha"),
                ("extra_1", "gooxeeVaedee5ahGh0ac"),
                ("extra_2", "2"),
            ]),
        )
        .unwrap();

    let expected = "GaaTooghi9ieMu2oopha_gooxeeVaedee5ahGh0ac_gooxeeVaedee5ahGh0ac";
    assert_eq!(object.name, expected);

    let stored = ModelE::get(&pool.conn, &Identifier::Pk(object.id.unwrap()))
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, expected);
}

#[test]
fn test_create_view_form_and_initial() {
    let pool = open_test_db("extra_create_initial");
    ModelE::create_table(&pool.conn);

    let view = CreateView::<ModelE>::new();
    let form = view.get_form().unwrap();
    assert_eq!(form.names().collect::<Vec<_>>(), vec!["name", "extra_1", "extra_2"]);

    let initial = view.get_initial(&pool.conn).unwrap();
    assert_eq!(initial.get("extra_1"), Some(&FieldValue::from("")));
    assert_eq!(initial.get("extra_2"), Some(&FieldValue::Integer(1)));
}

#[test]
fn test_update_view_get() {
    let pool = open_test_db("extra_update_get");
    ModelE::create_table(&pool.conn);

    let mut object = ModelE {
        id: None,
        name: "gah6eiPh3aeFohnaeNga_aiqu9gainae1Dei1jahf".into(),
    };
    object.save(&pool.conn).unwrap();
    assert_eq!(object.id, Some(1));

    let initial = UpdateView::new(object).get_initial(&pool.conn).unwrap();
    assert_eq!(
        initial.get("extra_1"),
        Some(&FieldValue::from("aiqu9gainae1Dei1jahf"))
    );
    assert_eq!(initial.get("extra_2"), Some(&FieldValue::Integer(1)));
    assert_eq!(
        initial.get("name"),
        Some(&FieldValue::from("gah6eiPh3aeFohnaeNga_aiqu9gainae1Dei1jahf"))
    );
}

#[test]
fn test_update_view_post() {
    let pool = open_test_db("extra_update_post");
    ModelE::create_table(&pool.conn);

    let mut object = ModelE {
        id: None,
        name: "ooL3iepai2beev6Noh0a".into(),
    };
    object.save(&pool.conn).unwrap();

    let updated = UpdateView::new(object)
        .post(
            &pool.conn,
            &form_data(&[
                ("name", "giengeeTee1ahkeegh0u"),
                ("extra_1", "AYootheusishai3oiNgo"),
                ("extra_2", "1"),
            ]),
        )
        .unwrap();

    assert_eq!(updated.name, "giengeeTee1ahkeegh0u_AYootheusishai3oiNgo");
    assert_eq!(ModelE::all(&pool.conn).unwrap(), vec![updated]);
}

#[test]
fn test_invalid_extra_value_saves_nothing() {
    let pool = open_test_db("extra_invalid_value");
    ModelE::create_table(&pool.conn);

    let err = CreateView::<ModelE>::new()
        .post(
            &pool.conn,
            &form_data(&[("name", "n"), ("extra_1", "s"), ("extra_2", "many")]),
        )
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(errors.get("extra_2"), Some("Enter a whole number."));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ModelE::count(&pool.conn), 0);
}

#[test]
fn test_missing_name() {
    let err = CreateView::<ModelF1>::new().get_form().unwrap_err();
    assert!(matches!(err, AppError::ExtraFieldMissingName));
}

#[test]
fn test_missing_form_field() {
    let err = CreateView::<ModelF2>::new().get_form().unwrap_err();
    assert!(matches!(err, AppError::ExtraFieldMissingFormField(ref name) if name == "formless"));
}

#[test]
fn test_missing_process_field_rolls_back() {
    let pool = open_test_db("extra_missing_process");
    ModelF3::create_table(&pool.conn);

    let err = CreateView::<ModelF3>::new()
        .post(&pool.conn, &form_data(&[("name", "never stored")]))
        .unwrap_err();

    assert!(matches!(err, AppError::ExtraFieldNotImplemented(ref name) if name == "unprocessed"));
    assert_eq!(ModelF3::count(&pool.conn), 0);
}

#[test]
fn test_error_messages_are_distinct() {
    let messages = [
        AppError::ExtraFieldMissingName.to_string(),
        AppError::ExtraFieldMissingFormField("f".into()).to_string(),
        AppError::ExtraFieldNotImplemented("f".into()).to_string(),
    ];

    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert_ne!(messages[0], messages[2]);
}

#[test]
fn test_no_extra_fields() {
    let pool = open_test_db("extra_none");
    ModelG::create_table(&pool.conn);

    let view = CreateView::<ModelG>::new();
    assert_eq!(view.get_form().unwrap().len(), 1);

    let object = view
        .post(&pool.conn, &form_data(&[("name", "plain"), ("ignored", "x")]))
        .unwrap();
    assert_eq!(object.name, "plain");
    assert_eq!(ModelG::count(&pool.conn), 1);
}
