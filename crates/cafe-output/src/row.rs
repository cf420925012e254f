//! Plain data row types written by the CSV exports.

use cafe_core::{Order, Timestamp, secs_to_minutes};
use chrono::NaiveTime;

/// Simulated sessions open at 07:00; timestamp zero maps to this instant.
pub const SESSION_OPEN_SECS: i64 = 7 * 3_600;

const SECS_PER_DAY: i64 = 86_400;

/// Clock-of-day of a simulated timestamp, wrapping past midnight.
pub fn clock_of_day(at: Timestamp) -> NaiveTime {
    let secs = (SESSION_OPEN_SECS + at.as_secs()).rem_euclid(SECS_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

/// One processed order of a test run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub test_number:    u32,
    pub customer:       String,
    /// First drink of the order; generated orders carry exactly one.
    pub drink:          &'static str,
    pub arrival:        NaiveTime,
    pub wait_minutes:   f64,
    pub priority_score: f64,
    pub reason:         &'static str,
}

impl ResultRow {
    pub fn from_order(test_number: u32, order: &Order) -> Self {
        Self {
            test_number,
            customer:       order.customer_name().to_owned(),
            drink:          first_drink(order),
            arrival:        clock_of_day(order.arrival()),
            wait_minutes:   order.total_wait_secs().map_or(0.0, secs_to_minutes),
            priority_score: order.priority_score(),
            reason:         order.priority_reason().label(),
        }
    }
}

/// One generated order, before simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub test_number: u32,
    pub customer:    String,
    pub drink:       &'static str,
    pub arrival:     NaiveTime,
    pub is_loyal:    bool,
}

impl DatasetRow {
    pub fn from_order(test_number: u32, order: &Order) -> Self {
        Self {
            test_number,
            customer: order.customer_name().to_owned(),
            drink:    first_drink(order),
            arrival:  clock_of_day(order.arrival()),
            is_loyal: order.is_loyal(),
        }
    }
}

fn first_drink(order: &Order) -> &'static str {
    order.drinks().first().map_or("", |d| d.as_str())
}
