//! Client-side CSV export for revenue reports.
//!
//! A comma-joined text blob matching what the report page displays, handed
//! to the browser as a download. Not a parsed format; nothing round-trips.

use crate::models::Report;

/// Build the CSV text for a generated report.
pub fn report_csv(report: &Report, start_date: &str, end_date: &str) -> String {
    let mut rows: Vec<String> = vec![
        "Salon Report".to_string(),
        format!("Period,{start_date} - {end_date}"),
        String::new(),
        format!("Total Revenue,{:.2}", report.total_revenue),
        format!("Total Appointments,{}", report.total_appointments),
        String::new(),
        "Top Services".to_string(),
        "Service,Count".to_string(),
    ];
    for service in &report.top_services {
        rows.push(format!("{},{}", service.service_name, service.count));
    }
    rows.push(String::new());
    rows.push("Employee Performance".to_string());
    rows.push("Employee,Appointments,Revenue".to_string());
    for emp in &report.employee_performance {
        rows.push(format!(
            "{},{},{:.2}",
            emp.full_name(),
            emp.appointments_count,
            emp.revenue
        ));
    }
    rows.join("\n")
}

/// File name for the exported report.
pub fn report_file_name(start_date: &str, end_date: &str) -> String {
    format!("report_{start_date}_{end_date}.csv")
}

/// Trigger a browser download of the CSV via a Blob-backed anchor click.
#[cfg(target_arch = "wasm32")]
pub fn download_csv(file_name: &str, contents: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(parts.as_ref(), &options) else {
        return;
    };
    let Ok(href) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&href);
            anchor.set_download(file_name);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&href);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeePerformance, TopService};

    fn sample_report() -> Report {
        Report {
            total_revenue: 420.5,
            total_appointments: 12,
            top_services: vec![
                TopService {
                    service_name: "Cut".into(),
                    count: 7,
                },
                TopService {
                    service_name: "Color".into(),
                    count: 3,
                },
            ],
            employee_performance: vec![EmployeePerformance {
                first_name: "Marie".into(),
                last_name: "Dupont".into(),
                appointments_count: 8,
                revenue: 310.0,
            }],
        }
    }

    #[test]
    fn test_report_csv_layout() {
        let csv = report_csv(&sample_report(), "2026-08-01", "2026-08-31");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Salon Report");
        assert_eq!(lines[1], "Period,2026-08-01 - 2026-08-31");
        assert_eq!(lines[3], "Total Revenue,420.50");
        assert_eq!(lines[4], "Total Appointments,12");
        assert!(lines.contains(&"Service,Count"));
        assert!(lines.contains(&"Cut,7"));
        assert!(lines.contains(&"Color,3"));
        assert!(lines.contains(&"Marie Dupont,8,310.00"));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("2026-08-01", "2026-08-31"),
            "report_2026-08-01_2026-08-31.csv"
        );
    }
}
