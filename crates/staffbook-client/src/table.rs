//! The employee grid: sortable, paged, rendered as a text table.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use staffbook_core::{Employee, Field};
use unicode_width::UnicodeWidthStr;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 8;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Column and direction the grid is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Column.
    pub field: Field,
    /// Direction.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending on `field`.
    pub fn ascending(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending on `field`.
    pub fn descending(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let text = |s: &str| s.to_lowercase();
        let ordering = match self.field {
            Field::Name => text(&a.name).cmp(&text(&b.name)),
            Field::Email => text(&a.email).cmp(&text(&b.email)),
            Field::Position => text(&a.position).cmp(&text(&b.position)),
            Field::Salary => a.salary.total_cmp(&b.salary),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    /// `name`, `-name`, `salary`, `-salary`, ...; a leading `-` means
    /// descending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix('-') {
            Some(rest) => Ok(SortOrder::descending(rest.parse()?)),
            None => Ok(SortOrder::ascending(s.parse()?)),
        }
    }
}

/// Cell text for a salary.
pub fn format_salary(salary: f64) -> String {
    salary.to_string()
}

/// A view over a list of employees.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTable {
    rows: Vec<Employee>,
    sort: Option<SortOrder>,
    page: usize,
}

impl EmployeeTable {
    /// Grid over `employees` in the order given, on the first page.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            rows: employees,
            sort: None,
            page: 0,
        }
    }

    /// Sort by `order`. Equal keys keep their current relative order.
    pub fn sort_by(&mut self, order: SortOrder) {
        self.rows.sort_by(|a, b| order.compare(a, b));
        self.sort = Some(order);
        self.page = 0;
    }

    /// Builder form of [`sort_by`](Self::sort_by).
    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.sort_by(order);
        self
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    /// Number of pages; an empty grid still has one.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Move to zero-based `page`, clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[Employee] {
        let start = (self.page * PAGE_SIZE).min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Render the current page with a `Page x of y` footer.
    pub fn render(&self) -> String {
        let header: Vec<String> = Field::ALL
            .iter()
            .map(|field| self.header_label(*field))
            .collect();
        let cells: Vec<[String; 4]> = self
            .page_rows()
            .iter()
            .map(|e| {
                [
                    e.name.clone(),
                    e.email.clone(),
                    e.position.clone(),
                    format_salary(e.salary),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &rule, &widths);
        if cells.is_empty() {
            out.push_str("No employees\n");
        }
        for row in &cells {
            push_row(&mut out, row, &widths);
        }
        out.push_str(&format!("Page {} of {}\n", self.page + 1, self.page_count()));
        out
    }

    fn header_label(&self, field: Field) -> String {
        match self.sort {
            Some(order) if order.field == field => {
                let arrow = match order.direction {
                    SortDirection::Ascending => "^",
                    SortDirection::Descending => "v",
                };
                format!("{} {arrow}", field.label())
            }
            _ => field.label().to_string(),
        }
    }
}

impl fmt::Display for EmployeeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// Pad to a display width, counting wide characters as two columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use staffbook_core::EmployeeFields;

    fn employee(name: &str, salary: f64) -> Employee {
        Employee::new(EmployeeFields {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            position: "Eng".to_string(),
            salary,
        })
    }

    fn names(table: &EmployeeTable) -> Vec<&str> {
        table.page_rows().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let table = EmployeeTable::new(vec![
            employee("bob", 1.0),
            employee("Ann", 2.0),
            employee("carl", 3.0),
        ])
        .sorted(SortOrder::ascending(Field::Name));
        assert_eq!(names(&table), vec!["Ann", "bob", "carl"]);
    }

    #[test]
    fn test_sort_by_salary_numeric_descending() {
        let table = EmployeeTable::new(vec![
            employee("A", 900.0),
            employee("B", 10000.0),
            employee("C", 50.0),
        ])
        .sorted(SortOrder::descending(Field::Salary));
        assert_eq!(names(&table), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let table = EmployeeTable::new(vec![
            employee("First", 5.0),
            employee("Second", 5.0),
            employee("Third", 1.0),
        ])
        .sorted(SortOrder::ascending(Field::Salary));
        assert_eq!(names(&table), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(
            "-salary".parse::<SortOrder>().unwrap(),
            SortOrder::descending(Field::Salary)
        );
        assert_eq!(
            "email".parse::<SortOrder>().unwrap(),
            SortOrder::ascending(Field::Email)
        );
        assert!("age".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_paging() {
        let employees: Vec<Employee> = (0..17).map(|i| employee(&format!("E{i:02}"), 1.0)).collect();
        let mut table = EmployeeTable::new(employees);
        assert_eq!(table.page_count(), 3);
        assert_eq!(table.page_rows().len(), PAGE_SIZE);

        table.set_page(2);
        assert_eq!(names(&table), vec!["E16"]);

        table.set_page(99);
        assert_eq!(table.page(), 2);
    }

    #[test]
    fn test_empty_table_renders_one_page() {
        let table = EmployeeTable::new(Vec::new());
        assert_eq!(table.page_count(), 1);
        let text = table.render();
        assert!(text.contains("No employees"));
        assert!(text.ends_with("Page 1 of 1\n"));
    }

    #[test]
    fn test_render_aligns_wide_characters() {
        let table = EmployeeTable::new(vec![employee("Ann", 1000.0), employee("田中", 2.5)]);
        let text = table.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name | Email      | Position | Salary");
        assert_eq!(lines[2], "Ann  | ann@x.com  | Eng      | 1000");
        assert_eq!(lines[3], "田中 | 田中@x.com | Eng      | 2.5");
        assert_eq!(lines[4], "Page 1 of 1");
    }

    #[test]
    fn test_header_marks_sorted_column() {
        let table = EmployeeTable::new(vec![employee("Ann", 1.0)])
            .sorted(SortOrder::descending(Field::Salary));
        assert!(table.render().lines().next().unwrap().ends_with("Salary v"));
    }
}
