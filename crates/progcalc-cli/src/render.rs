use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use num_bigint::BigUint;

use progcalc_core::{Calculator, History, describe_bits, mask, max_value, pad_text, to_text};
use progcalc_model::{Base, WordSize};

use crate::session::Notice;

/// One-line display used by the REPL, e.g. `HEX 0 [8-bit] | A + | F0(HEX) AND`.
pub fn display_line(calculator: &Calculator) -> String {
    let mut line = format!(
        "{} {} [{}]",
        calculator.base(),
        calculator.value(),
        calculator.word_size()
    );
    if let (Some(op), Some(operand)) = (calculator.pending_operation(), calculator.operand()) {
        line.push_str(&format!(
            " | {} {}",
            to_text(operand, calculator.base()),
            op.symbol()
        ));
    }
    if let Some(expression) = calculator.expression() {
        line.push_str(&format!(" | {expression}"));
    }
    line
}

/// Renderings of a value in every base, the active one first.
pub fn base_rows(value: &BigUint, word_size: WordSize, active: Base) -> Vec<(Base, String)> {
    let value = mask(value, word_size);
    let mut bases: Vec<Base> = vec![active];
    bases.extend(Base::ALL.into_iter().filter(|base| *base != active));
    bases
        .into_iter()
        .map(|base| (base, to_text(&value, base)))
        .collect()
}

pub fn value_table(calculator: &Calculator) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Base"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    for (base, text) in base_rows(calculator.magnitude(), calculator.word_size(), calculator.base())
    {
        let label = if base == calculator.base() {
            Cell::new(base.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(base.label())
        };
        table.add_row(vec![label, Cell::new(text)]);
    }
    table.add_row(vec![
        dim_cell("BITS"),
        Cell::new(describe_bits(calculator.magnitude(), calculator.word_size())),
    ]);
    table.add_row(vec![
        dim_cell("WORD"),
        Cell::new(calculator.word_size().to_string()),
    ]);
    table.add_row(vec![dim_cell("PENDING"), pending_cell(calculator)]);
    table
}

pub fn conversion_table(value: &BigUint, word_size: WordSize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Base"), header_cell("Value"), header_cell("Padded")]);
    apply_table_style(&mut table);
    let masked = mask(value, word_size);
    for base in Base::ALL {
        table.add_row(vec![
            Cell::new(base.label()),
            Cell::new(to_text(&masked, base)),
            dim_cell(pad_text(&masked, base, word_size)),
        ]);
    }
    table
}

pub fn history_table(history: &History) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Entry")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, entry) in history.entries().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(entry)]);
    }
    table
}

pub fn word_size_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Bits"),
        header_cell("Max (DEC)"),
        header_cell("Max (HEX)"),
    ]);
    apply_table_style(&mut table);
    table.set_content_arrangement(ContentArrangement::Disabled);
    align_column(&mut table, 0, CellAlignment::Right);
    for word_size in WordSize::ALL {
        let max = max_value(word_size);
        table.add_row(vec![
            Cell::new(word_size.bits()).add_attribute(Attribute::Bold),
            Cell::new(to_text(&max, Base::Dec)),
            Cell::new(to_text(&max, Base::Hex)),
        ]);
    }
    table
}

pub fn notice_table(notices: &[Notice]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Notice")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for notice in notices {
        table.add_row(vec![
            Cell::new(&notice.key).fg(Color::Yellow),
            Cell::new(&notice.message),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Bordered style for the main value table.
pub fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn pending_cell(calculator: &Calculator) -> Cell {
    let mut parts = Vec::new();
    if let (Some(op), Some(operand)) = (calculator.pending_operation(), calculator.operand()) {
        parts.push(format!("{} {}", to_text(operand, calculator.base()), op.symbol()));
    }
    if let Some(expression) = calculator.expression() {
        parts.push(expression.to_string());
    }
    if parts.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(parts.join(" | ")).fg(Color::Cyan)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use progcalc_model::{ArithmeticOp, CalculatorOptions};

    #[test]
    fn base_rows_put_active_base_first() {
        let rows = base_rows(&BigUint::from(10u32), WordSize::W8, Base::Hex);
        let labels: Vec<&str> = rows.iter().map(|(base, _)| base.label()).collect();
        assert_eq!(labels, vec!["HEX", "BIN", "OCT", "DEC"]);
        assert_eq!(rows[0].1, "A");
    }

    #[test]
    fn word_size_table_lists_every_width() {
        let mut table = word_size_table();
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("65535"));
        assert!(rendered.contains("FFFFFFFFFFFFFFFF"));
        assert!(rendered.contains(&"F".repeat(64)));
    }

    #[test]
    fn conversion_table_masks_and_pads() {
        let mut table = conversion_table(&BigUint::from(300u32), WordSize::W8);
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("2C"));
        assert!(rendered.contains("00101100"));
        assert!(rendered.contains("054"));
        assert!(rendered.contains("44"));
        assert!(!rendered.contains("300"));
        assert!(!rendered.contains("12C"));
    }

    #[test]
    fn display_line_shows_pending_state() {
        let mut calc = Calculator::new(
            CalculatorOptions::new()
                .with_base(Base::Hex)
                .with_word_size(WordSize::W8),
        );
        calc.load_value("A", Base::Hex).unwrap();
        calc.apply_arithmetic_op(ArithmeticOp::Add).unwrap();
        assert_eq!(display_line(&calc), "HEX 0 [8-bit] | A +");
    }
}
