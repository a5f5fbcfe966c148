//! Plain-text views over generated entities.

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use fixtura_core::{Catalog, Gender, Human, ProductItem, age_on, group_by_gender, mask_national_id};

use crate::CliError;

/// People grouped by gender, each with their age on `today`.
pub fn people_by_gender<W: Write>(
    out: &mut W,
    people: &[Human],
    today: NaiveDate,
) -> Result<(), CliError> {
    for group in group_by_gender(people) {
        writeln!(out, "Gender: {}", group.gender)?;
        for person in &group.people {
            let age = age_on(person.birth_date, today);
            if age == 0 {
                writeln!(out, "  {:<10} {:<15}Born today", person.first_name, person.last_name)?;
            } else {
                writeln!(out, "  {:<10} {:<15}{age}", person.first_name, person.last_name)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// People whose birth year falls in `from..=to`, in generation order.
pub fn people_born_between<W: Write>(
    out: &mut W,
    people: &[Human],
    from: i32,
    to: i32,
) -> Result<(), CliError> {
    for person in people {
        let year = person.birth_date.year();
        if (from..=to).contains(&year) {
            writeln!(
                out,
                "{:<15}{:<15} born in {year}",
                person.first_name, person.last_name
            )?;
        }
    }
    Ok(())
}

/// People of one gender, ordered by first name.
pub fn people_of_gender<W: Write>(
    out: &mut W,
    people: &[Human],
    gender: Gender,
) -> Result<(), CliError> {
    let mut selected: Vec<&Human> = people.iter().filter(|p| p.gender == gender).collect();
    selected.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    for person in selected {
        writeln!(out, "{:<15}{:<15}", person.first_name, person.last_name)?;
    }
    Ok(())
}

pub fn masked_national_ids<W: Write>(out: &mut W, people: &[Human]) -> Result<(), CliError> {
    for person in people {
        let masked = mask_national_id(&person.national_id, 4, 'X')?;
        writeln!(out, "{:<10} {:<15}{masked}", person.first_name, person.last_name)?;
    }
    Ok(())
}

/// Products priced above `min_price`, most expensive first.
pub fn high_value_products<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    min_price: Decimal,
) -> Result<(), CliError> {
    let mut items: Vec<ProductItem> = catalog
        .products()
        .iter()
        .filter(|product| product.unit_price > min_price)
        .map(ProductItem::from)
        .collect();
    items.sort_by(|a, b| b.unit_price.cmp(&a.unit_price));
    for item in &items {
        writeln!(out, "{:<25}{:>10}", item.name, format!("${:.2}", item.unit_price))?;
    }
    Ok(())
}

/// Products of the category named `category`, through the linked graph.
pub fn products_in_category<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    category: &str,
) -> Result<(), CliError> {
    let linked = catalog
        .linked_products()
        .into_iter()
        .filter(|linked| linked.category_name.eq_ignore_ascii_case(category));
    for linked in linked {
        let item = ProductItem::from(linked.product);
        writeln!(out, "{:<25}{:>10}", item.name, format!("${:.2}", item.unit_price))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use fixtura_core::{Address, Category, Product};

    use super::*;

    fn person(id: u32, first: &str, last: &str, gender: Gender, born: (i32, u32, u32)) -> Human {
        Human {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: NaiveDate::from_ymd_opt(born.0, born.1, born.2).unwrap(),
            email: format!("{first}.{last}@example.com").to_lowercase(),
            gender,
            national_id: format!("{id:09}"),
            address: Address {
                id,
                ..Address::default()
            },
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn people() -> Vec<Human> {
        vec![
            person(1, "Zoe", "Young", Gender::Female, (1960, 5, 1)),
            person(2, "Adam", "Brown", Gender::Male, (1990, 1, 1)),
            person(3, "Alice", "Adams", Gender::Female, (2024, 1, 1)),
            person(4, "Carlos", "Abbott", Gender::Male, (1975, 12, 31)),
        ]
    }

    #[test]
    fn groups_list_ages_and_newborns() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let text = render(|out| people_by_gender(out, &people(), today));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Gender: Male");
        assert!(lines[1].contains("Carlos") && lines[1].ends_with("48"));
        assert!(lines[2].contains("Adam") && lines[2].ends_with("34"));
        assert_eq!(lines[4], "Gender: Female");
        assert!(lines[5].contains("Alice") && lines[5].ends_with("Born today"));
    }

    #[test]
    fn birth_year_window_is_inclusive() {
        let text = render(|out| people_born_between(out, &people(), 1960, 1975));
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("born in 1960"));
        assert!(text.contains("born in 1975"));
    }

    #[test]
    fn gender_view_orders_by_first_name() {
        let text = render(|out| people_of_gender(out, &people(), Gender::Female));
        let names: Vec<&str> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
        assert_eq!(names, vec!["Alice", "Zoe"]);
    }

    #[test]
    fn national_ids_are_masked() {
        let text = render(|out| masked_national_ids(out, &people()[..1]));
        assert!(text.trim_end().ends_with("XXX-XX-0001"));
    }

    #[test]
    fn product_views_filter_and_sort() {
        let product = |id: u32, category_id: u32, cents: i64| Product {
            id,
            name: format!("Item {id}"),
            category_id,
            unit_price: Decimal::new(cents, 2),
            units_in_stock: 1,
        };
        let category = |id: u32, name: &str| Category {
            id,
            name: name.to_string(),
            products: BTreeSet::new(),
        };
        let catalog = Catalog::relink(
            vec![category(1, "Clothing"), category(2, "Tools")],
            vec![product(1, 1, 15_000), product(2, 2, 9_999), product(3, 2, 45_050)],
        )
        .unwrap();

        let text = render(|out| high_value_products(out, &catalog, Decimal::new(100, 0)));
        let names: Vec<&str> = text.lines().map(|l| l.split("  ").next().unwrap()).collect();
        assert_eq!(names, vec!["Item 3", "Item 1"]);
        assert!(text.contains("$450.50"));

        let text = render(|out| products_in_category(out, &catalog, "clothing"));
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Item 1"));
    }
}
