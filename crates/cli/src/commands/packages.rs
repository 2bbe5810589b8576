use lapwise_core::display::format_price;
use lapwise_core::domain::package::StudentPackage;
use serde::Serialize;

use crate::commands::{load_session, CommandResult};

const COMMAND: &str = "packages";

#[derive(Debug, Serialize)]
struct PackageView<'a> {
    #[serde(flatten)]
    package: &'a StudentPackage,
    audience: &'static str,
    laptops: Vec<&'a str>,
}

pub fn run(json_output: bool) -> CommandResult {
    let session = match load_session(COMMAND) {
        Ok(session) => session,
        Err(failure) => return failure,
    };

    let catalog = &session.catalog;
    let views: Vec<PackageView<'_>> = catalog
        .packages()
        .iter()
        .map(|package| PackageView {
            package,
            audience: package.tier.audience(),
            laptops: catalog
                .package_laptops(package)
                .into_iter()
                .map(|product| product.name.as_str())
                .collect(),
        })
        .collect();

    if json_output {
        return CommandResult::success_with_data(
            COMMAND,
            format!("{} student packages", views.len()),
            &views,
        );
    }

    CommandResult::text(render_human(&views, session.currency()))
}

fn render_human(views: &[PackageView<'_>], currency: &str) -> String {
    if views.is_empty() {
        return "No student packages are configured.".to_string();
    }

    let mut lines = Vec::new();
    for view in views {
        let package = view.package;
        let badge =
            package.badge.as_deref().map(|badge| format!(" [{badge}]")).unwrap_or_default();
        lines.push(format!(
            "{} ({}) from {}{badge}",
            package.title,
            view.audience,
            format_price(package.price, currency)
        ));
        lines.push(format!("  {}", package.subtitle));
        lines.push(format!("  Laptops: {}", view.laptops.join(", ")));
        lines.extend(package.features.iter().map(|feature| format!("  - {feature}")));
    }

    lines.join("\n")
}
