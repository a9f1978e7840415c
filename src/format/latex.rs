//! LaTeX comparison tables.
//!
//! One `table` environment per benchmark parameter. Rows are the GCD
//! profiles, columns the SC profiles, each cell `<diff> ± <error>` in
//! scientific notation; cells whose interval contains zero are shaded.

use crate::config::catalog::version_style;
use crate::model::{Benchmark, ComparisonCell, Strategy, Version};
use crate::stats::ComparisonGrid;
use std::fmt;

/// Shading prefix of an inconclusive cell.
pub const INCONCLUSIVE_SHADE: &str = "\\cellcolor[HTML]{d6d6d6} ";

/// Scientific notation with `precision` fractional digits and a signed
/// exponent of at least two digits, e.g. `1.180e-03`.
#[must_use]
pub fn format_sci(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |digits| ('-', digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Body of one table cell.
#[must_use]
pub fn latex_cell(cell: &ComparisonCell) -> String {
    let body = format!(
        "{} ± {}",
        format_sci(cell.difference, 3),
        format_sci(cell.error_margin, 3)
    );
    if cell.is_inconclusive() {
        format!("{INCONCLUSIVE_SHADE}{body}")
    } else {
        body
    }
}

/// A comparison grid rendered as a LaTeX `table` block.
#[derive(Debug, Clone, Copy)]
pub struct LatexTable<'a> {
    pub benchmark: Benchmark,
    pub grid: &'a ComparisonGrid,
}

impl fmt::Display for LatexTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let benchmark = self.benchmark.name();
        let parameter = self.grid.parameter;
        let header: Vec<String> = Version::group(Strategy::SwiftConcurrency)
            .iter()
            .map(|v| format!("\\textbf{{{}}}", version_style(*v).label))
            .collect();

        writeln!(f, "\\begin{{table}}[!ht]")?;
        writeln!(f, "\\footnotesize")?;
        writeln!(f, "  \\begin{{center}}")?;
        writeln!(
            f,
            "    \\caption{{Difference (GCD - SC) between the means of the execution time results in \\textit{{{benchmark}}} for N = {parameter}.}}"
        )?;
        writeln!(f, "    \\label{{tab:{benchmark}_{parameter}}}")?;
        writeln!(f, "    \\begin{{tabular}}{{|l|c|c|c|}}")?;
        writeln!(f, "      \\hline")?;
        writeln!(f, "      \\textbf{{}} & {}\\\\", header.join(" & "))?;
        writeln!(f, "      \\hline")?;

        for (row, version) in Version::group(Strategy::Gcd).iter().enumerate() {
            let cells: Vec<String> = self.grid.cells[row].iter().map(latex_cell).collect();
            writeln!(
                f,
                "      \\textbf{{{}}} & {}\\\\",
                version_style(*version).label,
                cells.join(" & ")
            )?;
            writeln!(f, "      \\hline")?;
        }

        writeln!(f, "    \\end{{tabular}}")?;
        writeln!(f, "  \\end{{center}}")?;
        writeln!(f, "\\end{{table}}")?;
        writeln!(f)
    }
}

/// Render one grid, including the trailing blank line.
#[must_use]
pub fn latex_table(benchmark: Benchmark, grid: &ComparisonGrid) -> String {
    LatexTable { benchmark, grid }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(difference: f64, error_margin: f64) -> ComparisonCell {
        ComparisonCell {
            difference,
            error_margin,
        }
    }

    #[test]
    fn test_format_sci() {
        assert_eq!(format_sci(0.001_18, 3), "1.180e-03");
        assert_eq!(format_sci(-0.000_42, 3), "-4.200e-04");
        assert_eq!(format_sci(467.35, 3), "4.674e+02");
        assert_eq!(format_sci(0.0, 3), "0.000e+00");
        assert_eq!(format_sci(1.5e-120, 3), "1.500e-120");
        assert_eq!(format_sci(f64::NAN, 3), "nan");
    }

    #[test]
    fn test_latex_cell_plain() {
        assert_eq!(latex_cell(&cell(0.5, 0.0588)), "5.000e-01 ± 5.880e-02");
    }

    #[test]
    fn test_latex_cell_shaded_when_zero_in_interval() {
        assert_eq!(
            latex_cell(&cell(0.01, 0.02)),
            "\\cellcolor[HTML]{d6d6d6} 1.000e-02 ± 2.000e-02"
        );
        // Equal magnitude touches zero and counts as inconclusive.
        assert!(latex_cell(&cell(-0.01, 0.01)).starts_with(INCONCLUSIVE_SHADE));
    }

    #[test]
    fn test_table_layout() {
        let grid = ComparisonGrid {
            parameter: 10,
            cells: [[cell(1.0, 0.1); 3]; 3],
        };
        let table = latex_table(Benchmark::Fibonacci, &grid);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "\\begin{table}[!ht]");
        assert_eq!(
            lines[3],
            "    \\caption{Difference (GCD - SC) between the means of the execution time results in \\textit{Fibonacci} for N = 10.}"
        );
        assert_eq!(lines[4], "    \\label{tab:Fibonacci_10}");
        assert_eq!(
            lines[7],
            "      \\textbf{} & \\textbf{SC (-Onone)} & \\textbf{SC (-O)} & \\textbf{SC (-Osize)}\\\\"
        );
        assert_eq!(
            lines[13],
            "      \\textbf{GCD (-Osize)} & 1.000e+00 ± 1.000e-01 & 1.000e+00 ± 1.000e-01 & 1.000e+00 ± 1.000e-01\\\\"
        );
        assert_eq!(lines[lines.len() - 2], "\\end{table}");
        assert!(table.ends_with("\\end{table}\n\n"));
        assert_eq!(lines.iter().filter(|l| l.trim() == "\\hline").count(), 5);
    }
}
