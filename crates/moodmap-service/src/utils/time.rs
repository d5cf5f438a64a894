use chrono::Utc;

#[inline]
pub fn get_current_time() -> i64 {
    Utc::now().timestamp()
}
