use super::*;
use crate::clause::SortOrder;
use crate::expr::Expr;
use crate::function::Function;
use crate::object::NamedObject;
use crate::param::Param;

fn col(name: &str) -> Expr {
    Expr::raw(name)
}

fn users_select() -> SelectStatement {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(col("id"));
    stmt.add_expression(col("name"));
    stmt.set_source(col("users"));
    stmt
}

// ==================== SELECT ====================

#[test]
fn select_renders_available_clauses() {
    let mut stmt = users_select();
    assert_eq!(stmt.text().unwrap(), "SELECT id, name FROM users");

    stmt.set_condition(col("id").equals(&Expr::literal(5)).unwrap());
    assert_eq!(stmt.text().unwrap(), "SELECT id, name FROM users WHERE (id) = (5)");
    assert!(stmt.parameters().is_empty());
}

#[test]
fn empty_select_is_invalid_state() {
    let mut stmt = SelectStatement::new();
    stmt.set_source(col("users"));
    assert!(!stmt.is_valid());
    assert!(stmt.text().unwrap_err().is_invalid_state());

    stmt.add_expression(Expr::star());
    assert!(stmt.is_valid());
    assert_eq!(stmt.text().unwrap(), "SELECT * FROM users");
}

#[test]
fn select_without_from_is_still_valid() {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(Expr::literal(1));
    assert_eq!(stmt.text().unwrap(), "SELECT 1");
}

#[test]
fn text_is_cached_between_mutations() {
    let stmt = users_select();
    let first = stmt.text().unwrap();
    let second = stmt.text().unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
}

#[test]
fn mutations_refresh_text() {
    let mut stmt = users_select();
    let before = stmt.text().unwrap().to_string();

    stmt.add_expression(col("email"));
    let after_add = stmt.text().unwrap().to_string();
    assert_ne!(before, after_add);

    stmt.set_distinct(true);
    assert_eq!(stmt.text().unwrap(), "SELECT DISTINCT id, name, email FROM users");

    stmt.set_source(col("accounts"));
    assert_eq!(stmt.text().unwrap(), "SELECT DISTINCT id, name, email FROM accounts");

    stmt.set_condition(col("active"));
    assert_eq!(
        stmt.text().unwrap(),
        "SELECT DISTINCT id, name, email FROM accounts WHERE active"
    );

    stmt.where_mut().clear_condition();
    assert_eq!(stmt.text().unwrap(), "SELECT DISTINCT id, name, email FROM accounts");
}

#[test]
fn join_before_source_is_invalid_state() {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(Expr::star());
    let err = stmt.inner_join(col("b"), col("cond")).unwrap_err();
    assert!(err.is_invalid_state());
}

#[test]
fn full_select_clause_order() {
    let users = NamedObject::table("users").unwrap();
    let dept = users.column("dept").unwrap();
    let count = Function::count_all().to_expr();

    let mut stmt = SelectStatement::new();
    stmt.add_expression(&dept);
    stmt.add_expression(count.aliased("total").unwrap());
    stmt.set_source(&users);
    stmt.set_condition(col("active"));
    stmt.add_group_by(&dept);
    stmt.set_having(count.gt(&Expr::literal(5)).unwrap());
    stmt.add_order_by(&dept, SortOrder::Desc);

    assert_eq!(
        stmt.text().unwrap(),
        "SELECT users.dept, COUNT(*) AS total FROM users WHERE active \
         GROUP BY users.dept HAVING (COUNT(*)) > (5) ORDER BY (users.dept) DESC"
    );
}

#[test]
fn shared_parameter_appears_once() {
    let p = Param::new("$1", 5_i32).unwrap();
    let bound = Expr::param(p.clone());

    let mut stmt = SelectStatement::new();
    stmt.add_expression(col("id").plus(&bound).unwrap());
    stmt.set_source(col("users"));
    stmt.set_condition(col("id").equals(&bound).unwrap());

    let params = stmt.parameters();
    assert_eq!(params.len(), 1);
    assert!(params.get(0).unwrap().same_as(&p));
}

#[test]
fn parameters_follow_clause_order() {
    let a = Param::new("$a", 1_i32).unwrap();
    let b = Param::new("$b", 2_i32).unwrap();

    let mut stmt = SelectStatement::new();
    stmt.add_expression(col("x"));
    stmt.set_source(col("t"));
    stmt.set_condition(col("y").equals(&Expr::param(b.clone())).unwrap());
    stmt.add_order_by(Expr::param(a.clone()), SortOrder::Asc);
    stmt.add_group_by(col("x"));
    stmt.set_having(col("z").gt(&Expr::param(a.clone())).unwrap());

    assert_eq!(stmt.parameters().names(), vec!["$b", "$a"]);
}

#[test]
fn subquery_wraps_text_and_params() {
    let p = Param::new("$1", 10_i32).unwrap();
    let mut inner = SelectStatement::new();
    inner.add_expression(col("user_id"));
    inner.set_source(col("orders"));
    inner.set_condition(col("total").gt(&Expr::param(p.clone())).unwrap());

    let sub = inner.to_subquery().unwrap();
    let mut outer = SelectStatement::new();
    outer.add_expression(Expr::star());
    outer.set_source(col("users"));
    outer.set_condition(col("id").in_list(&[sub]).unwrap());

    assert_eq!(
        outer.text().unwrap(),
        "SELECT * FROM users WHERE (id) IN ((SELECT user_id FROM orders WHERE (total) > ($1)))"
    );
    assert!(outer.parameters().contains(&p));
}

// ==================== INSERT / UPDATE / DELETE ====================

#[test]
fn insert_renders_fields_and_values() {
    let mut stmt = InsertStatement::into_target(col("t"));
    assert!(stmt.text().unwrap_err().is_invalid_state());

    stmt.add_field(col("a"), Expr::literal(1));
    stmt.add_field(col("b"), Expr::literal(2));
    assert_eq!(stmt.text().unwrap(), "INSERT INTO t (a, b) VALUES (1, 2)");

    stmt.add_field(col("c"), Expr::literal(3));
    assert_eq!(stmt.text().unwrap(), "INSERT INTO t (a, b, c) VALUES (1, 2, 3)");
}

#[test]
fn update_renders_assignments_then_where() {
    let mut stmt = UpdateStatement::table(col("t"));
    stmt.add_field(col("a"), Expr::literal(1));
    stmt.add_field(col("b"), Expr::literal(2));
    stmt.set_condition(col("id").equals(&Expr::literal(3)).unwrap());
    assert_eq!(stmt.text().unwrap(), "UPDATE t SET a = (1), b = (2) WHERE (id) = (3)");
}

#[test]
fn update_with_from_source() {
    let mut stmt = UpdateStatement::table(col("t"));
    stmt.add_field(col("a"), col("s.a"));
    stmt.set_source(col("s"));
    stmt.set_condition(col("t.id").equals(&col("s.id")).unwrap());
    assert_eq!(
        stmt.text().unwrap(),
        "UPDATE t SET a = (s.a) FROM s WHERE (t.id) = (s.id)"
    );
}

#[test]
fn update_without_fields_is_invalid() {
    let stmt = UpdateStatement::table(col("t"));
    assert!(!stmt.is_valid());
    assert!(stmt.text().unwrap_err().is_invalid_state());
}

#[test]
fn delete_needs_source() {
    let mut stmt = DeleteStatement::new();
    assert!(stmt.text().unwrap_err().is_invalid_state());

    stmt.set_source(col("t"));
    assert_eq!(stmt.text().unwrap(), "DELETE FROM t");

    stmt.set_condition(col("id").equals(&Expr::literal(1)).unwrap());
    stmt.and_condition(col("archived")).unwrap();
    assert_eq!(stmt.text().unwrap(), "DELETE FROM t WHERE ((id) = (1)) AND (archived)");
}

#[test]
fn raw_statement() {
    let p = Param::new("$1", 1_i64).unwrap();
    let raw = RawStatement::with_params("SELECT $1", [p.clone()]).unwrap();
    assert!(raw.is_valid());
    assert!(raw.clauses().is_empty());
    assert_eq!(raw.text().unwrap(), "SELECT $1");
    assert_eq!(raw.keyword(), "");
    assert!(raw.parameters().contains(&p));

    assert!(RawStatement::new("   ").unwrap_err().is_invalid_argument());
}

#[test]
fn render_clauses_spacing() {
    let mut from = crate::clause::FromClause::new();
    from.set_source(col("t"));
    let empty_where = crate::clause::ConditionClause::where_clause();

    let clauses: Vec<&dyn Clause> = vec![&from as &dyn Clause, &empty_where];
    assert_eq!(render_clauses("DELETE", &clauses).unwrap(), "DELETE FROM t");
    assert_eq!(render_clauses("", &clauses).unwrap(), "FROM t");
}

#[test]
fn kinds_and_keywords() {
    assert_eq!(SelectStatement::new().keyword(), "");
    assert_eq!(InsertStatement::new().keyword(), "INSERT INTO");
    assert_eq!(UpdateStatement::new().kind(), StatementKind::Update);
    assert_eq!(DeleteStatement::new().keyword(), "DELETE");
    assert_eq!(StatementKind::Raw.to_string(), "raw");
}
