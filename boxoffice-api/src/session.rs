use boxoffice_core::SessionRecord;
use tower_sessions::Session;

use crate::error::AppError;

const SESSION_KEY: &str = "boxoffice.session";

/// Read the typed record, or an empty one for a new client.
pub async fn load_record(session: &Session) -> Result<SessionRecord, AppError> {
    Ok(session.get::<SessionRecord>(SESSION_KEY).await?.unwrap_or_default())
}

pub async fn save_record(session: &Session, record: &SessionRecord) -> Result<(), AppError> {
    session.insert(SESSION_KEY, record).await?;
    Ok(())
}
