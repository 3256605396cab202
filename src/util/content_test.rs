use super::*;

#[test]
fn nav_hrefs_are_absolute() {
    for item in NAV_ITEMS.iter().chain(DASHBOARD_NAV.iter()).chain(ADMIN_NAV.iter()) {
        assert!(item.href.starts_with('/'), "{} is not absolute", item.href);
    }
}

#[test]
fn admin_nav_lives_under_dashboard() {
    for item in &ADMIN_NAV {
        assert!(item.href.starts_with("/dashboard/admin/"));
    }
}

#[test]
fn pricing_plans_have_features() {
    for plan in &PRICING_PLANS {
        assert!(!plan.features.is_empty());
    }
}
