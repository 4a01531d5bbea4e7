use crate::dispatch::format_score;
use crate::extraction::Section;
use crate::scoring::ScoreWeights;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// One row per label: sections using the table, label, weight.
pub fn weights_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Sections", "Answer", "Weight"]);

    for weight_table in ScoreWeights::tables() {
        let sections: Vec<&str> = Section::ALL
            .into_iter()
            .filter(|section| std::ptr::eq(ScoreWeights::table_for(*section), weight_table))
            .map(Section::title)
            .collect();
        let sections = sections.join(" / ");

        for (label, weight) in weight_table.entries() {
            table.add_row(vec![sections.clone(), label.to_string(), format_score(*weight)]);
        }
    }
    table
}

pub fn print_weights() {
    println!("{}", weights_table());
}
