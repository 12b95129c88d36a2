use super::*;

fn hours(days: &[&str], start: &str, end: &str) -> OpenHours {
    OpenHours {
        days: days.iter().map(|d| (*d).to_string()).collect(),
        local_start: start.to_string(),
        local_end: end.to_string(),
    }
}

fn clinic(open_hours: Vec<OpenHours>) -> SiteRecord {
    SiteRecord {
        name: "Moscone Center".to_string(),
        display_address: "747 Howard St, San Francisco, CA 94103".to_string(),
        open_hours,
        ..SiteRecord::default()
    }
}

#[test]
fn capitalize_first_uppercases_only_first_char() {
    assert_eq!(capitalize_first("monday"), "Monday");
    assert_eq!(capitalize_first("tUESDAY"), "TUESDAY");
    assert_eq!(capitalize_first("Friday"), "Friday");
    assert_eq!(capitalize_first("é"), "É");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn format_clock_uses_twelve_hour_clock_without_leading_zero() {
    assert_eq!(format_clock("08:00:00"), "8:00AM");
    assert_eq!(format_clock("15:00:00"), "3:00PM");
    assert_eq!(format_clock("12:15:00"), "12:15PM");
    assert_eq!(format_clock("00:30:00"), "12:30AM");
    assert_eq!(format_clock("23:59:59"), "11:59PM");
}

#[test]
fn format_clock_returns_empty_for_malformed_input() {
    assert_eq!(format_clock(""), "");
    assert_eq!(format_clock("8am"), "");
    assert_eq!(format_clock("25:00:00"), "");
    assert_eq!(format_clock("noon"), "");
}

#[test]
fn renders_interval_days_and_times() {
    let rendered = render_hours(&hours(&["monday", "wednesday"], "08:00:00", "15:00:00"));
    assert_eq!(rendered, "Monday,Wednesday - 8:00AM-3:00PM");
}

#[test]
fn malformed_times_render_blank_segments() {
    let rendered = render_hours(&hours(&["friday"], "late", "15:00"));
    assert_eq!(rendered, "Friday - -");
}

#[test]
fn render_site_lists_name_address_and_each_interval() {
    let site = clinic(vec![
        hours(&["monday", "wednesday"], "08:00:00", "15:00:00"),
        hours(&["saturday"], "09:30:00", "13:00:00"),
    ]);

    assert_eq!(
        render_site(&site),
        "Moscone Center\n\
         747 Howard St, San Francisco, CA 94103\n\
         Monday,Wednesday - 8:00AM-3:00PM\n\
         Saturday - 9:30AM-1:00PM"
    );
}

#[test]
fn render_site_without_hours_is_name_and_address() {
    assert_eq!(
        render_site(&clinic(Vec::new())),
        "Moscone Center\n747 Howard St, San Francisco, CA 94103"
    );
}

#[test]
fn render_site_is_deterministic() {
    let site = clinic(vec![hours(&["sunday"], "10:00:00", "14:00:00")]);
    assert_eq!(render_site(&site), render_site(&site));
}

#[test]
fn compose_message_appends_signup_line() {
    let site = clinic(Vec::new());
    let message = compose_message(&site, "https://myturn.ca.gov/");
    assert!(message.starts_with(&render_site(&site)));
    assert!(message.ends_with("\nSign up at: https://myturn.ca.gov/"));
}
