//! Records the board starts with when no seed file is configured.

use crate::expiry::Expiry;
use crate::restriction_record::RestrictionRecord;
use crate::restriction_status::RestrictionStatus;

pub fn seed_records() -> Vec<RestrictionRecord> {
    vec![
        RestrictionRecord {
            id: "minebot_tob".into(),
            block_id: "0499".into(),
            username: "𓂃 𝔪𝔦𝔫𝔢𝔟𝔬𝔱 ་༘࿐".into(),
            status: RestrictionStatus::SoftBlocked,
            restriction_type: "Ослабленная блокировка".into(),
            status_note: None,
            reason: "Многократные нарушения политики безопасности".into(),
            date_received: "Скрыто".into(),
            date_expiry: Expiry::parse("07.01.2026"),
            full_date: "Получено Скрыто, снято будет 07.01.2026".into(),
        },
        RestrictionRecord {
            id: "Clexi_t".into(),
            block_id: "0002".into(),
            username: "Клекси".into(),
            status: RestrictionStatus::Blocked,
            restriction_type: "Автоматическая блокировка".into(),
            status_note: Some("(Вечная Блокировка)".into()),
            reason: "Успешная попытка взлома консоли CWS.".into(),
            date_received: "04.01.2021".into(),
            date_expiry: Expiry::Never,
            full_date: "Получено 04.01.2021, снято будет Никогда".into(),
        },
        RestrictionRecord {
            id: "Unknown".into(),
            block_id: "0001".into(),
            username: "мать.ебал".into(),
            status: RestrictionStatus::Restricted,
            restriction_type: "Автоматическое ограничение входа".into(),
            status_note: Some("(Блокировка и ограничение)".into()),
            reason: "Нарушение правил EULA, попытка нарушить CWS-сервера".into(),
            date_received: "29.12.2020".into(),
            date_expiry: Expiry::parse("26.04.2027"),
            full_date: "Получено 29.12.2020, снято будет 26.04.2027".into(),
        },
    ]
}
