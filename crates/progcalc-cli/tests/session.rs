use progcalc_cli::render::display_line;
use progcalc_cli::session::{feed, parse_keys};
use progcalc_core::Calculator;
use progcalc_model::{Base, CalculatorOptions, WordSize};

fn hex8() -> Calculator {
    Calculator::new(
        CalculatorOptions::new()
            .with_base(Base::Hex)
            .with_word_size(WordSize::W8),
    )
}

fn run(calculator: &mut Calculator, line: &str) -> String {
    let keys = parse_keys(&[line]).unwrap();
    let notices = feed(calculator, &keys).unwrap();
    let mut out: Vec<String> = notices
        .iter()
        .map(|notice| format!("! {}: {}", notice.key, notice.message))
        .collect();
    out.push(display_line(calculator));
    out.join("\n")
}

#[test]
fn arithmetic_line_by_line() {
    let mut calc = hex8();
    insta::assert_snapshot!(run(&mut calc, "FF +"), @"HEX 0 [8-bit] | FF +");
    insta::assert_snapshot!(run(&mut calc, "2 ="), @"HEX 1 [8-bit]");
    insta::assert_snapshot!(calc.history().latest().unwrap(), @"FF + 2 = 1");
}

#[test]
fn logic_chain_is_shown_while_armed() {
    let mut calc = hex8();
    insta::assert_snapshot!(run(&mut calc, "F0 and"), @"HEX F0 [8-bit] | F0(HEX) AND");
    insta::assert_snapshot!(run(&mut calc, "3C and"), @"HEX 30 [8-bit]");
}

#[test]
fn rejected_keys_are_reported_and_skipped() {
    let mut calc = hex8();
    insta::assert_snapshot!(
        run(&mut calc, "FFF"),
        @r"
    ! F: limit reached: value does not fit in a 8-bit word
    HEX FF [8-bit]
    "
    );
    insta::assert_snapshot!(
        run(&mut calc, "oct 9"),
        @r"
    ! 9: digit '9' is not valid in base OCT
    OCT 377 [8-bit]
    "
    );
}

#[test]
fn word_size_switch_truncates() {
    let mut calc = Calculator::new(CalculatorOptions::default());
    insta::assert_snapshot!(run(&mut calc, "300 w8"), @"DEC 44 [8-bit]");
}

#[test]
fn json_snapshot_shape() {
    let mut calc = hex8();
    run(&mut calc, "A + 5");
    insta::assert_json_snapshot!(calc.snapshot(), @r#"
    {
      "value": "5",
      "base": "HEX",
      "word_size": 8,
      "pending_operation": "ADD",
      "operand": "A",
      "expression": null,
      "history": []
    }
    "#);
}
