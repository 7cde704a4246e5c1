use teloxide::types::UserId;

use crate::bot_state::BotState;
use crate::handlers::utils::{
    no_whales_text, nothing_above_threshold_text, single_button, threshold_required_text,
    whale_alert_text, whale_fetch_failed_text, whale_followup_keyboard,
};
use crate::models::{Action, Reply, TransferRecord};

fn qualifies(transfer: &TransferRecord, threshold: f64) -> bool {
    transfer.amount_usd.is_some_and(|amount| amount >= threshold)
}

fn alerts_for(
    state: &BotState,
    user: UserId,
    threshold: f64,
    transfers: &[TransferRecord],
) -> Vec<Reply> {
    transfers
        .iter()
        .filter(|t| qualifies(t, threshold))
        .map(|t| {
            Reply::new(user, whale_alert_text(t, state.details_url()))
                .with_keyboard(whale_followup_keyboard())
        })
        .collect()
}

/// Fetches recent transfers once and builds alerts.
///
/// With a `target` only that user is considered and every outcome gets a
/// reply. Without one, every stored threshold is checked against the same
/// list and failures stay silent.
pub async fn check_whales(state: &BotState, target: Option<UserId>) -> Vec<Reply> {
    let transfers = match state.analytics().recent_transfers().await {
        Ok(transfers) => transfers,
        Err(e) => {
            log::error!("Error fetching whale transfers: {}", e);
            return target
                .map(|user| {
                    Reply::new(user, whale_fetch_failed_text())
                        .with_keyboard(single_button("Try Again 🔄", Action::RequestWhaleCheck))
                })
                .into_iter()
                .collect();
        }
    };

    if transfers.is_empty() {
        log::info!("No whale transfers in the latest page");
        return target
            .map(|user| Reply::new(user, no_whales_text()).with_keyboard(whale_followup_keyboard()))
            .into_iter()
            .collect();
    }

    let Some(user) = target else {
        let mut replies = Vec::new();
        for (user, threshold) in state.thresholds().await {
            replies.extend(alerts_for(state, user, threshold, &transfers));
        }
        return replies;
    };

    let Some(threshold) = state.threshold(user).await else {
        return vec![Reply::new(user, threshold_required_text())
            .with_keyboard(single_button("Set Threshold 🐋", Action::RequestThreshold))];
    };

    let alerts = alerts_for(state, user, threshold, &transfers);
    if alerts.is_empty() {
        return vec![Reply::new(user, nothing_above_threshold_text())
            .with_keyboard(whale_followup_keyboard())];
    }
    alerts
}
