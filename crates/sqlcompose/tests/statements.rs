use sqlcompose::prelude::*;
use sqlcompose::{Clause, JoinKind, ObjectKind, Operator, ParamDirection, ToSql, Type, ops};

fn raw(text: &str) -> Expr {
    Expr::raw(text)
}

#[test]
fn select_with_inlined_literal_has_no_parameters() {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(raw("id"));
    stmt.add_expression(raw("name"));
    stmt.set_source(raw("users"));
    stmt.set_condition(raw("id").equals(&Expr::literal(5)).unwrap());

    assert!(stmt.is_valid());
    assert_eq!(stmt.text().unwrap(), "SELECT id, name FROM users WHERE (id) = (5)");
    assert!(stmt.parameters().is_empty());
}

#[test]
fn select_with_bound_value_has_one_parameter() {
    let five = Param::new("$1", 5_i32).unwrap();
    let mut stmt = SelectStatement::new();
    stmt.add_expression(raw("id"));
    stmt.add_expression(raw("name"));
    stmt.set_source(raw("users"));
    stmt.set_condition(raw("id").equals(&Expr::param(five.clone())).unwrap());

    assert_eq!(stmt.text().unwrap(), "SELECT id, name FROM users WHERE (id) = ($1)");
    let params = stmt.parameters();
    assert_eq!(params.len(), 1);
    assert!(params.contains(&five));
    assert_eq!(params.as_refs().len(), 1);
}

#[test]
fn update_scenario() {
    let mut stmt = UpdateStatement::table(raw("t"));
    stmt.add_field(raw("a"), Expr::literal(1));
    stmt.add_field(raw("b"), Expr::literal(2));
    stmt.set_condition(raw("id").equals(&Expr::literal(3)).unwrap());

    assert_eq!(stmt.text().unwrap(), "UPDATE t SET a = (1), b = (2) WHERE (id) = (3)");
}

#[test]
fn group_by_having_scenario() {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(raw("dept"));
    stmt.add_expression(Function::count_all());
    stmt.set_source(raw("employees"));
    stmt.add_group_by(raw("dept"));
    stmt.set_having(
        Function::count_all()
            .to_expr()
            .gt(&Expr::literal(5))
            .unwrap(),
    );

    assert_eq!(
        stmt.text().unwrap(),
        "SELECT dept, COUNT(*) FROM employees GROUP BY dept HAVING (COUNT(*)) > (5)"
    );
    assert!(stmt.group_by().having().is_available());
}

#[test]
fn shared_parameter_is_bound_once() {
    let tenant = Param::new("$1", uuid::Uuid::nil()).unwrap();
    let tenant_expr = Expr::param(tenant.clone());

    let mut stmt = SelectStatement::new();
    stmt.add_expression(raw("id"));
    stmt.add_expression(tenant_expr.aliased("tenant").unwrap());
    stmt.set_source(raw("projects"));
    stmt.set_condition(raw("tenant_id").equals(&tenant_expr).unwrap());

    let params = stmt.parameters();
    assert_eq!(params.len(), 1);
    assert!(params.get(0).unwrap().same_as(&tenant));
}

#[test]
fn boundary_errors() {
    let empty = SelectStatement::new();
    assert!(empty.text().unwrap_err().is_invalid_state());

    let insert = InsertStatement::into_target(raw("t"));
    assert!(insert.text().unwrap_err().is_invalid_state());

    let mut select = SelectStatement::new();
    select.add_expression(Expr::star());
    assert!(select.inner_join(raw("b"), raw("x")).unwrap_err().is_invalid_state());

    let err = ops::BETWEEN.compute(&[&raw("a"), &raw("b")]).unwrap_err();
    assert!(err.is_invalid_operands());

    assert!(RawStatement::new("").unwrap_err().is_invalid_argument());
}

#[test]
fn no_stale_text_after_any_mutation() {
    let mut stmt = SelectStatement::new();
    stmt.add_expression(raw("a"));
    let mut seen = vec![stmt.text().unwrap().to_string()];

    stmt.add_expression(raw("b"));
    seen.push(stmt.text().unwrap().to_string());
    stmt.set_distinct(true);
    seen.push(stmt.text().unwrap().to_string());
    stmt.set_source(raw("t"));
    seen.push(stmt.text().unwrap().to_string());
    stmt.set_condition(raw("ok"));
    seen.push(stmt.text().unwrap().to_string());
    stmt.from_mut().join(JoinKind::Cross, Some(raw("u")), None).unwrap();
    seen.push(stmt.text().unwrap().to_string());

    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(seen.last().unwrap(), "SELECT DISTINCT a, b FROM t CROSS JOIN u WHERE ok");

    let mut insert = InsertStatement::into_target(raw("t"));
    insert.add_field(raw("a"), Expr::literal(1));
    let before = insert.text().unwrap().to_string();
    insert.add_field(raw("b"), Expr::literal(2));
    assert_ne!(insert.text().unwrap(), before);
}

#[test]
fn text_is_idempotent() {
    let mut stmt = DeleteStatement::from_source(raw("t"));
    stmt.set_condition(raw("id").is_null().unwrap());
    let first = stmt.text().unwrap().to_string();
    assert_eq!(stmt.text().unwrap(), first);
    assert_eq!(first, "DELETE FROM t WHERE (id) IS NULL");
}

#[test]
fn named_objects_compose_into_statements() {
    let public = NamedObject::schema("public").unwrap();
    let users = public.child(ObjectKind::Table, "users").unwrap();
    let orders = public.child(ObjectKind::Table, "orders").unwrap();
    let user_id = users.column("id").unwrap();
    let order_user = orders.column("user_id").unwrap();

    let mut stmt = SelectStatement::new();
    stmt.add_expression(&user_id);
    stmt.add_expression(Alias::new(&order_user, Some("buyer")).unwrap());
    stmt.set_source(&users);
    stmt.inner_join(&orders, user_id.to_expr().equals(&order_user.to_expr()).unwrap())
        .unwrap();
    stmt.add_order_by(&user_id, SortOrder::Asc);

    assert_eq!(
        stmt.text().unwrap(),
        "SELECT public.users.id, public.orders.user_id AS buyer \
         FROM public.users INNER JOIN public.orders ON (public.users.id) = (public.orders.user_id) \
         ORDER BY (public.users.id) ASC"
    );
}

#[test]
fn typed_output_parameters_bind_null() {
    let out = Param::output("$1", Type::INT8).unwrap();
    assert_eq!(out.direction(), ParamDirection::Output);
    assert!(!out.has_value());

    let stmt = RawStatement::with_params("SELECT $1::int8", [out.clone()]).unwrap();
    let params = stmt.parameters();
    let refs = params.as_refs();
    assert_eq!(refs.len(), 1);

    let mut buf = bytes::BytesMut::new();
    for ty in [Type::INT8, Type::TEXT] {
        let bound = refs[0].to_sql_checked(&ty, &mut buf).unwrap();
        assert!(matches!(bound, tokio_postgres::types::IsNull::Yes));
    }
}
