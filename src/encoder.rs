use serde::{de::DeserializeOwned, Serialize};

// MessagePack for queue payloads, JSON for the report contract.

pub fn encode(input: impl Serialize) -> anyhow::Result<Vec<u8>> {
    Ok(rmp_serde::to_vec(&input)?)
}

pub fn decode<T: DeserializeOwned>(input: &[u8]) -> anyhow::Result<T> {
    Ok(rmp_serde::from_slice(input)?)
}

pub fn encode_json(input: impl Serialize) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&input)?)
}

pub fn decode_json<T: DeserializeOwned>(input: &[u8]) -> anyhow::Result<T> {
    Ok(serde_json::from_slice(input)?)
}
