use sqlcompose::prelude::*;
use sqlcompose::{CommandTextProvider, DelimitedCommandText};
use std::time::Duration;

fn insert_row(id: &Param, name: &str) -> InsertStatement {
    let mut stmt = InsertStatement::into_target(Expr::raw("users"));
    stmt.add_field(Expr::raw("id"), Expr::param(id.clone()));
    stmt.add_field(Expr::raw("name"), Expr::string(name));
    stmt
}

#[test]
fn prepared_commands_carry_config() {
    let a = Param::new("$1", uuid::Uuid::nil()).unwrap();
    let b = Param::new("$2", uuid::Uuid::from_u128(1)).unwrap();
    let first = insert_row(&a, "ann");
    let second = insert_row(&b, "o'brien");

    let config: ExecConfig =
        serde_json::from_str(r#"{"command_timeout": {"secs": 2, "nanos": 0}}"#).unwrap();
    let batcher = CommandBatcher::new(config).unwrap();
    let commands = batcher.prepare(&[&first, &second]).unwrap();

    assert_eq!(commands.len(), 1);
    let cmd = &commands[0];
    assert_eq!(
        cmd.text,
        "INSERT INTO users (id, name) VALUES ($1, 'ann');\
         INSERT INTO users (id, name) VALUES ($2, 'o''brien')"
    );
    assert_eq!(cmd.params.names(), vec!["$1", "$2"]);
    assert_eq!(cmd.timeout, Some(Duration::from_secs(2)));
    assert_eq!(cmd.param_refs().len(), 2);
    assert_eq!(cmd.statements, 2);
    assert!(!cmd.is_bindable());
}

#[test]
fn parameterized_statements_run_one_per_command() {
    let a = Param::new("$1", uuid::Uuid::nil()).unwrap();
    let b = Param::new("$1", uuid::Uuid::from_u128(1)).unwrap();
    let first = insert_row(&a, "ann");
    let second = insert_row(&b, "bob");

    let config: ExecConfig = serde_json::from_str(r#"{"max_batch_size": 1}"#).unwrap();
    let commands = CommandBatcher::new(config)
        .unwrap()
        .prepare(&[&first, &second])
        .unwrap();

    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(PreparedCommand::is_bindable));
    assert!(commands[0].params.get(0).unwrap().same_as(&a));
    assert!(commands[1].params.get(0).unwrap().same_as(&b));
    assert_eq!(commands[1].text, "INSERT INTO users (id, name) VALUES ($1, 'bob')");
}

#[derive(Debug)]
struct Transactional;

impl CommandTextProvider for Transactional {
    fn command_text(&self, statements: &[&dyn SqlStatement]) -> SqlResult<String> {
        let body = DelimitedCommandText::new("; ").command_text(statements)?;
        Ok(format!("BEGIN; {body}; COMMIT"))
    }
}

#[test]
fn custom_provider_wraps_each_batch() {
    let one = RawStatement::new("DELETE FROM a").unwrap();
    let two = RawStatement::new("DELETE FROM b").unwrap();
    let three = RawStatement::new("DELETE FROM c").unwrap();

    let batcher =
        CommandBatcher::with_provider(ExecConfig::new().with_max_batch_size(2), Transactional)
            .unwrap();
    let commands = batcher.prepare(&[&one, &two, &three]).unwrap();

    let texts: Vec<&str> = commands.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "BEGIN; DELETE FROM a; DELETE FROM b; COMMIT",
            "BEGIN; DELETE FROM c; COMMIT",
        ]
    );
}
