use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Alert, AlertKind, AlertPriority, Medicine};

use super::{trigger::SystemAlertTrigger, EXPIRY_WARNING_DAYS, LOW_STOCK_RATIO};

/// Rebuild the alert list from scratch.
///
/// A medicine inside the expiry window (1..30 days) produces only the
/// expiry alert; otherwise a low ratio produces an urgent stock alert.
/// Stock alerts come first, then expiry alerts, then the optional system alert.
pub fn generate_alerts(
    inventory: &[Medicine],
    today: NaiveDate,
    now: DateTime<Utc>,
    trigger: &mut dyn SystemAlertTrigger,
) -> Vec<Alert> {
    if inventory.is_empty() {
        return Vec::new();
    }

    let mut stock_alerts = Vec::new();
    let mut expiry_alerts = Vec::new();

    for medicine in inventory {
        let days = medicine.days_to_expiry(today);
        if days > 0 && days < EXPIRY_WARNING_DAYS {
            expiry_alerts.push(medicine_alert(
                medicine,
                AlertPriority::Medium,
                "Medicine Expiring Soon",
                format!("{} expires in {} days", medicine.name, days),
                now,
            ));
        } else if medicine.remaining_ratio() < LOW_STOCK_RATIO {
            stock_alerts.push(medicine_alert(
                medicine,
                AlertPriority::Urgent,
                "Low Stock Alert",
                format!(
                    "{} is running low ({} remaining)",
                    medicine.name, medicine.remaining
                ),
                now,
            ));
        }
    }

    let mut alerts = stock_alerts;
    alerts.append(&mut expiry_alerts);

    if trigger.fire(inventory, today) {
        alerts.push(Alert {
            id: Uuid::new_v4().to_string(),
            kind: AlertKind::System,
            priority: AlertPriority::Low,
            title: "System Update Available".into(),
            message: "A new software update is available for your Smart Medicine Box".into(),
            medicine_id: None,
            created_at: now,
        });
    }

    alerts
}

fn medicine_alert(
    medicine: &Medicine,
    priority: AlertPriority,
    title: &str,
    message: String,
    now: DateTime<Utc>,
) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        kind: AlertKind::Medicine,
        priority,
        title: title.into(),
        message,
        medicine_id: Some(medicine.id),
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};

    use super::*;
    use crate::derivation::trigger::{Always, Never};
    use crate::models::Frequency;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn medicine(id: u64, remaining: u32, stock: u32, expires_in_days: i64) -> Medicine {
        Medicine {
            id,
            name: format!("Med{id}"),
            dosage: "5mg".into(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            frequency: Frequency::Daily,
            uses: String::new(),
            stock,
            remaining,
            expiry: today() + Duration::days(expires_in_days),
        }
    }

    #[test]
    fn low_stock_far_from_expiry_is_urgent() {
        let alerts = generate_alerts(&[medicine(1, 5, 30, 60)], today(), Utc::now(), &mut Never);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::Urgent);
        assert_eq!(alerts[0].title, "Low Stock Alert");
        assert_eq!(alerts[0].message, "Med1 is running low (5 remaining)");
        assert_eq!(alerts[0].medicine_id, Some(1));
    }

    #[test]
    fn expiring_soon_replaces_low_stock_alert() {
        let alerts = generate_alerts(&[medicine(1, 2, 30, 10)], today(), Utc::now(), &mut Never);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::Medium);
        assert_eq!(alerts[0].message, "Med1 expires in 10 days");
    }

    #[test]
    fn expired_medicine_gets_no_expiry_alert() {
        let healthy = generate_alerts(&[medicine(1, 30, 30, 0)], today(), Utc::now(), &mut Never);
        assert!(healthy.is_empty());

        let low = generate_alerts(&[medicine(1, 1, 30, -5)], today(), Utc::now(), &mut Never);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].priority, AlertPriority::Urgent);
    }

    #[test]
    fn stock_alerts_precede_expiry_alerts_and_system_alert_is_last() {
        let inventory = [
            medicine(1, 30, 30, 5),
            medicine(2, 1, 30, 90),
            medicine(3, 30, 30, 90),
        ];
        let alerts = generate_alerts(&inventory, today(), Utc::now(), &mut Always);

        let ids: Vec<_> = alerts.iter().map(|a| a.medicine_id).collect();
        assert_eq!(ids, vec![Some(2), Some(1), None]);
        assert_eq!(alerts[2].kind, AlertKind::System);
        assert_eq!(alerts[2].priority, AlertPriority::Low);
    }

    #[test]
    fn empty_inventory_never_asks_the_trigger() {
        assert!(generate_alerts(&[], today(), Utc::now(), &mut Always).is_empty());
    }
}
