use chrono::{DateTime, Utc};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::{fmt, marker::PhantomData};

// Convert epoch seconds with a fractional part into `DateTime<Utc>`, rounded
// to the microsecond. Kraken sends four decimal places, well inside f64 precision.
pub fn datetime_utc_from_epoch_s(epoch_s: f64) -> Option<DateTime<Utc>> {
    if !epoch_s.is_finite() || epoch_s < 0.0 {
        return None;
    }

    let epoch_us = (epoch_s * 1_000_000.0).round() as i64;
    DateTime::<Utc>::from_timestamp(
        epoch_us.div_euclid(1_000_000),
        (epoch_us.rem_euclid(1_000_000) * 1_000) as u32,
    )
}

// Deserialize a `f64` seconds value as `DateTime<Utc>`.
pub fn de_f64_epoch_s_as_datetime_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let epoch_s = f64::deserialize(deserializer)?;
    datetime_utc_from_epoch_s(epoch_s).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid epoch seconds timestamp: {epoch_s}"))
    })
}

// Deserialize an optional `f64` seconds value as `DateTime<Utc>`. Kraken uses
// 0 for "not set" so zero maps to None as well as null or a missing key.
pub fn de_optional_f64_epoch_s_as_datetime_utc<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(epoch_s) if epoch_s == 0.0 => Ok(None),
        Some(epoch_s) => datetime_utc_from_epoch_s(epoch_s)
            .map(Some)
            .ok_or_else(|| {
                serde::de::Error::custom(format!("invalid epoch seconds timestamp: {epoch_s}"))
            }),
    }
}

// Deserialize a JSON object into a vec of (key, value) pairs in the order the
// keys appear in the document. Used for maps keyed by opaque ids.
pub fn de_ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedMapVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for OrderedMapVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map keyed by id")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(16));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
}

// Deserialize null as the type's default value
pub fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
