// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use bigdecimal::BigDecimal;
use lumen_engine::{EvaluationContext, Expression, StandardTypeComparator, is_greater_than};
use lumen_type::{Text, Value};
use num_bigint::BigInt;

fn gt(left: Value, right: Value) -> bool {
	is_greater_than(&left, &right, &StandardTypeComparator).unwrap()
}

fn decimal(s: &str) -> Value {
	Value::decimal(s.parse::<BigDecimal>().unwrap())
}

#[test]
fn test_same_tier_matches_native_ordering() {
	let ints = [i32::MIN, -7, -1, 0, 1, 7, i32::MAX];
	for l in ints {
		for r in ints {
			assert_eq!(gt(Value::int4(l), Value::int4(r)), l > r, "{l} > {r}");
		}
	}

	let longs = [i64::MIN, -1, 0, 1, i64::MAX];
	for l in longs {
		for r in longs {
			assert_eq!(gt(Value::int8(l), Value::int8(r)), l > r, "{l} > {r}");
		}
	}

	let doubles = [f64::NEG_INFINITY, -1.5, -0.0, 0.0, 1e-300, 2.5, f64::INFINITY, f64::NAN];
	for l in doubles {
		for r in doubles {
			assert_eq!(gt(Value::float8(l), Value::float8(r)), l > r, "{l} > {r}");
		}
	}
}

#[test]
fn test_decimal_tested_before_double() {
	assert!(!gt(decimal("1"), Value::float8(2.0)));
	assert!(gt(Value::float8(2.0), decimal("1")));

	// rounds to 0.1f64
	let just_above = decimal("0.10000000000000000555111512312578270211815834045410156251");
	assert!(gt(just_above, Value::float8(0.1)));
}

#[test]
fn test_long_against_int_promotes_to_long() {
	assert!(gt(Value::int8(5i64), Value::int4(3)));
	assert!(!gt(Value::int4(3), Value::int8(5i64)));
}

#[test]
fn test_text_independent_of_representation() {
	assert!(gt(Value::utf8("b"), Value::utf8("a")));
	assert!(gt(Value::Text(Text::Shared(Arc::from("b"))), Value::Text(Text::Static("a"))));
	assert!(!gt(Value::Text(Text::Static("a")), Value::Text(Text::Shared(Arc::from("b")))));
}

#[test]
fn test_big_integer_boundary() {
	let above: BigInt = BigInt::from(i64::MAX) + 1;
	assert!(gt(Value::int(above.clone()), Value::int8(i64::MAX)));
	assert!(!gt(Value::int8(i64::MAX), Value::int(above)));

	let below = BigInt::from(i64::MIN) - 1;
	assert!(gt(Value::int8(i64::MIN), Value::int(below)));
}

#[test]
fn test_idempotent() {
	let ctx = EvaluationContext::new();
	let pairs = [
		(Value::int4(2), Value::float8(1.5)),
		(Value::utf8("x"), Value::utf8("y")),
		(Value::float8(f64::NAN), Value::int4(1)),
		(decimal("3.14"), Value::float4(3.14f32)),
	];

	for (left, right) in pairs {
		let first = is_greater_than(&left, &right, ctx.comparator()).unwrap();
		let second = is_greater_than(&left, &right, ctx.comparator()).unwrap();
		assert_eq!(first, second);
	}
}

#[test]
fn test_incomparable_operands_fail() {
	let ctx = EvaluationContext::new();
	let e = Expression::greater_than(Expression::constant(true), Expression::constant(1));

	let err = e.evaluate(&ctx).unwrap_err();
	assert_eq!(err.code, "COMPARE_001");
	assert_eq!(err.to_string().lines().next(), Some("[COMPARE_001] Cannot compare Boolean with Int4"));
}

#[test]
fn test_nested_in_equality() {
	let ctx = EvaluationContext::new();
	let e = Expression::equal(
		Expression::greater_than(Expression::constant(3), Expression::constant(2)),
		Expression::constant(true),
	);
	assert!(matches!(e.evaluate(&ctx).unwrap(), Value::Boolean(true)));
}
