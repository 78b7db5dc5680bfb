use super::activity::HourlyActivitySet;
use super::formatter::{format_seconds, Unit};
use super::messages::Message;
use super::summary::{category_breakdown, MostActive};
use crate::msg_print;
use prettytable::{format, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints a converted set as a table: one row per active hour, one
    /// column per category (largest first), totals in the last row and
    /// column.
    pub fn hourly(set: &HourlyActivitySet, unit: Unit) {
        if set.is_empty() {
            msg_print!(Message::NoActivity);
            return;
        }

        let columns = category_breakdown(set);
        let decimals = unit.decimals().max(0) as usize;
        let value = |v: f64| format!("{:.*}", decimals, v);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut header = vec![Cell::new("HOUR")];
        header.extend(columns.iter().map(|stat| Cell::new(&stat.name.to_uppercase())));
        header.push(Cell::new(&format!("TOTAL ({})", unit.suffix())));
        table.set_titles(Row::new(header));

        for bucket in set.iter().filter(|bucket| !bucket.is_empty()) {
            let mut cells = vec![Cell::new(&format!("{:02}:00", bucket.hour))];
            cells.extend(
                columns
                    .iter()
                    .map(|stat| Cell::new(&value(bucket.seconds(&stat.name))).style_spec("r")),
            );
            let total = bucket.total.unwrap_or_else(|| unit.round(bucket.sum()));
            cells.push(Cell::new(&value(total)).style_spec("r"));
            table.add_row(Row::new(cells));
        }

        let mut footer = vec![Cell::new("TOTAL").style_spec("b")];
        footer.extend(
            columns
                .iter()
                .map(|stat| Cell::new(&value(unit.round(stat.seconds))).style_spec("br")),
        );
        let grand_total: f64 = columns.iter().map(|stat| stat.seconds).sum();
        footer.push(Cell::new(&value(unit.round(grand_total))).style_spec("br"));
        table.add_row(Row::new(footer));

        table.printstd();
    }

    /// Prints the busiest category and hour. Expects values in seconds.
    pub fn most_active(most: &MostActive) {
        match (&most.category, most.hour) {
            (None, None) => msg_print!(Message::NoMostActive),
            (category, hour) => {
                if let Some(name) = category {
                    msg_print!(Message::MostActiveCategory {
                        name: name.clone(),
                        duration: format_seconds(most.category_seconds),
                    });
                }
                if let Some(hour) = hour {
                    msg_print!(Message::MostActiveHour {
                        hour,
                        duration: format_seconds(most.hour_seconds),
                    });
                }
            }
        }
    }
}
