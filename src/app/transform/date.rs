use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::mapping::MappingError;

/// Conversion between stored timestamps and the offset datetimes exposed on the wire.
///
/// Stored timestamps carry no zone. Reading one asserts a UTC offset, writing one
/// keeps the wall-clock fields and drops whatever offset the value had.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateMapper;

impl DateMapper {
    pub fn as_offset_date_time<'a>(
        &self,
        timestamp: impl Into<Option<&'a NaiveDateTime>>,
    ) -> Result<DateTime<FixedOffset>, MappingError> {
        let timestamp = timestamp
            .into()
            .ok_or(MappingError::InvalidArgument("Timestamp cannot be null"))?;
        Ok(Utc.fix().from_utc_datetime(timestamp))
    }

    pub fn as_timestamp<'a>(
        &self,
        offset_date_time: impl Into<Option<&'a DateTime<FixedOffset>>>,
    ) -> Result<NaiveDateTime, MappingError> {
        let offset_date_time = offset_date_time
            .into()
            .ok_or(MappingError::InvalidArgument("OffsetDateTime cannot be null"))?;
        Ok(offset_date_time.naive_local())
    }
}
