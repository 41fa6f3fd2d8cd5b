use hearth::aggregator::{
    calculate_category_shares, calculate_trip_totals, summarize_report, CategoryTotals,
};
use hearth::parser::{Category, Expense, Report, Trip};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(amount: &str, is_reimbursable: bool, category: Option<&str>) -> Expense {
    Expense {
        id: None,
        description: None,
        amount: dec(amount),
        is_reimbursable,
        receipt_url: None,
        category: category.map(|name| Category {
            name: name.to_string(),
        }),
    }
}

fn with_receipt(mut expense: Expense, url: &str) -> Expense {
    expense.receipt_url = Some(url.to_string());
    expense
}

fn trip(name: &str, expenses: Vec<Expense>) -> Trip {
    Trip {
        id: None,
        name: name.to_string(),
        dates: None,
        expenses,
    }
}

#[test]
fn test_summarize_madrid_example() {
    let report = Report {
        trips: vec![trip(
            "Madrid",
            vec![expense("10", true, Some("Taxi")), expense("20", false, None)],
        )],
    };

    let summary = summarize_report(&report);

    assert_eq!(summary.total_propio, dec("10"));
    assert_eq!(summary.total_empresa, dec("20"));
    assert_eq!(
        summary.summary["Taxi"],
        CategoryTotals {
            propio: dec("10"),
            empresa: Decimal::ZERO,
            total: dec("10")
        }
    );
    assert_eq!(
        summary.summary["Sin Categoría"],
        CategoryTotals {
            propio: Decimal::ZERO,
            empresa: dec("20"),
            total: dec("20")
        }
    );
    assert_eq!(summary.ordered_keys, vec!["Sin Categoría", "Taxi"]);
}

#[test]
fn test_summarize_empty_report() {
    let summary = summarize_report(&Report::default());

    assert_eq!(summary.total_propio, Decimal::ZERO);
    assert_eq!(summary.total_empresa, Decimal::ZERO);
    assert!(summary.summary.is_empty());
    assert!(summary.ordered_keys.is_empty());
    assert!(summary.grouped_for_detail.is_empty());
    assert!(summary.receipts.is_empty());
}

#[test]
fn test_totals_match_category_sums() {
    let report = Report {
        trips: vec![
            trip(
                "Lisboa",
                vec![
                    expense("12.5", true, Some("Comida")),
                    expense("80", false, Some("Hotel")),
                    expense("3.25", true, Some("Comida")),
                ],
            ),
            trip(
                "Oporto",
                vec![expense("40", false, Some("Tren")), expense("7.75", true, None)],
            ),
        ],
    };

    let summary = summarize_report(&report);
    let category_sum: Decimal = summary.summary.values().map(|t| t.total).sum();

    assert_eq!(summary.total_propio + summary.total_empresa, category_sum);
    assert_eq!(summary.summary["Comida"].propio, dec("15.75"));
    assert_eq!(summary.grand_total(), dec("143.5"));
}

#[test]
fn test_cent_amounts_sum_exactly() {
    let report = Report {
        trips: vec![trip(
            "Madrid",
            vec![
                expense("0.10", true, Some("Café")),
                expense("0.20", true, Some("Café")),
            ],
        )],
    };

    let summary = summarize_report(&report);

    assert_eq!(summary.total_propio, dec("0.30"));
    assert_eq!(summary.summary["Café"].total, dec("0.3"));

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["totalPropio"], 0.3);
}

#[test]
fn test_blank_category_uses_placeholder() {
    let report = Report {
        trips: vec![trip("Roma", vec![expense("5", false, Some(""))])],
    };

    let summary = summarize_report(&report);

    assert_eq!(summary.ordered_keys, vec!["Sin Categoría"]);
}

#[test]
fn test_grouped_for_detail_keeps_trip_names_and_order() {
    let report = Report {
        trips: vec![
            trip("Bilbao", vec![expense("1", true, Some("Taxi"))]),
            trip("Sevilla", vec![expense("2", false, Some("Taxi"))]),
        ],
    };

    let summary = summarize_report(&report);
    let taxis = &summary.grouped_for_detail["Taxi"];

    assert_eq!(taxis.len(), 2);
    assert_eq!(taxis[0].trip_name, "Bilbao");
    assert_eq!(taxis[0].expense.amount, dec("1"));
    assert_eq!(taxis[1].trip_name, "Sevilla");
}

#[test]
fn test_receipts_in_encounter_order() {
    let report = Report {
        trips: vec![
            trip(
                "Paris",
                vec![
                    with_receipt(expense("1", true, Some("B")), "https://files/r1.pdf"),
                    with_receipt(expense("2", true, Some("A")), ""),
                    expense("3", false, Some("A")),
                ],
            ),
            trip(
                "Lyon",
                vec![with_receipt(expense("4", false, None), "https://files/r2.jpg")],
            ),
        ],
    };

    let summary = summarize_report(&report);
    let urls: Vec<&str> = summary
        .receipts
        .iter()
        .filter_map(|e| e.receipt_url.as_deref())
        .collect();

    assert_eq!(urls, vec!["https://files/r1.pdf", "https://files/r2.jpg"]);
}

#[test]
fn test_summary_serializes_camel_case() {
    let report = Report {
        trips: vec![trip("Madrid", vec![expense("10", true, Some("Taxi"))])],
    };

    let value = serde_json::to_value(summarize_report(&report)).unwrap();

    assert_eq!(value["totalPropio"], 10.0);
    assert_eq!(value["totalEmpresa"], 0.0);
    assert_eq!(value["orderedKeys"][0], "Taxi");
    assert_eq!(value["summary"]["Taxi"]["total"], 10.0);
    assert_eq!(value["groupedForDetail"]["Taxi"][0]["trip_name"], "Madrid");
    assert_eq!(value["groupedForDetail"]["Taxi"][0]["amount"], 10.0);
}

#[test]
fn test_calculate_category_shares() {
    let report = Report {
        trips: vec![trip(
            "Berlin",
            vec![
                expense("25", true, Some("Comida")),
                expense("50", false, Some("Hotel")),
                expense("25", false, Some("Avión")),
            ],
        )],
    };
    let summary = summarize_report(&report);

    let shares = calculate_category_shares(&summary, 2);

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Hotel");
    assert_eq!(shares[0].percentage, dec("50"));
    // Ties keep ordered_keys order
    assert_eq!(shares[1].category, "Avión");
}

#[test]
fn test_category_shares_empty() {
    let summary = summarize_report(&Report::default());
    assert!(calculate_category_shares(&summary, 5).is_empty());
}

#[test]
fn test_calculate_trip_totals() {
    let report = Report {
        trips: vec![trip(
            "Valencia",
            vec![
                with_receipt(expense("10", true, None), "r.pdf"),
                expense("30", false, None),
            ],
        )],
    };

    let totals = calculate_trip_totals(&report);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].trip_name, "Valencia");
    assert_eq!(totals[0].propio, dec("10"));
    assert_eq!(totals[0].empresa, dec("30"));
    assert_eq!(totals[0].total, dec("40"));
    assert_eq!(totals[0].expense_count, 2);
    assert_eq!(totals[0].receipt_count, 1);
}
