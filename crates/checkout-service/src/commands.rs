//! Parsing of stdin lines into workflow commands.
//!
//! The vocabulary mirrors the order form: `pilih <id>` selects a product,
//! `nama`/`jumlah`/`kurir` fill the text fields, `tujuan` opens the
//! destination picker (or, with an id, confirms a city), `batal` closes it,
//! `kirim` submits.

use checkout_types::WorkflowCommand;

/// Parses one input line. Returns `None` for an unknown verb or a malformed
/// argument.
pub fn parse(line: &str) -> Option<WorkflowCommand> {
	let mut parts = line.splitn(2, char::is_whitespace);
	let verb = parts.next()?;
	let rest = parts.next().map(str::trim).unwrap_or("");

	match verb {
		"pilih" => rest.parse().ok().map(WorkflowCommand::SelectProduct),
		"nama" => {
			if rest.is_empty() {
				None
			} else {
				Some(WorkflowCommand::SetBuyerName(rest.to_string()))
			}
		}
		// Quantity stays raw text; the workflow validates it at submission.
		"jumlah" => Some(WorkflowCommand::SetQuantityText(rest.to_string())),
		"kurir" => {
			if rest.is_empty() {
				None
			} else {
				Some(WorkflowCommand::SetCourier(rest.to_string()))
			}
		}
		"tujuan" => {
			if rest.is_empty() {
				Some(WorkflowCommand::OpenDestinationPicker)
			} else {
				Some(WorkflowCommand::SelectDestination(rest.to_string()))
			}
		}
		"batal" => Some(WorkflowCommand::CancelDestinationPicker),
		"kirim" => Some(WorkflowCommand::Submit),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_order_form_vocabulary() {
		assert_eq!(parse("pilih 3"), Some(WorkflowCommand::SelectProduct(3)));
		assert_eq!(
			parse("nama Budi Santoso"),
			Some(WorkflowCommand::SetBuyerName("Budi Santoso".to_string()))
		);
		assert_eq!(
			parse("jumlah 2"),
			Some(WorkflowCommand::SetQuantityText("2".to_string()))
		);
		assert_eq!(
			parse("kurir jne"),
			Some(WorkflowCommand::SetCourier("jne".to_string()))
		);
		assert_eq!(parse("tujuan"), Some(WorkflowCommand::OpenDestinationPicker));
		assert_eq!(
			parse("tujuan 5"),
			Some(WorkflowCommand::SelectDestination("5".to_string()))
		);
		assert_eq!(parse("batal"), Some(WorkflowCommand::CancelDestinationPicker));
		assert_eq!(parse("kirim"), Some(WorkflowCommand::Submit));
	}

	#[test]
	fn quantity_text_may_be_anything_including_garbage() {
		assert_eq!(
			parse("jumlah abc"),
			Some(WorkflowCommand::SetQuantityText("abc".to_string()))
		);
	}

	#[test]
	fn unknown_or_malformed_input_is_rejected() {
		assert_eq!(parse("beli 3"), None);
		assert_eq!(parse("pilih banyak"), None);
		assert_eq!(parse("nama"), None);
		assert_eq!(parse("kurir"), None);
	}
}
