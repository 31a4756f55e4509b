//! Protobuf ⇄ domain conversion
//!
//! `google.protobuf.Struct` numbers are always doubles, so integers come back
//! from the wire as `AttributeValue::Float`. An absent struct and an empty one
//! both decode to an empty map, which encodes back as absent.

use prost_types::value::Kind;
use prost_types::{ListValue, NullValue, Struct, Value};

use crate::matchmaker::{Attributes, AttributeValue, Player, Ticket};
use crate::proto;

// ============================================================================
// Attribute values
// ============================================================================

pub fn value_from_proto(value: Value) -> AttributeValue {
    match value.kind {
        None | Some(Kind::NullValue(_)) => AttributeValue::Null,
        Some(Kind::NumberValue(v)) => AttributeValue::Float(v),
        Some(Kind::StringValue(s)) => AttributeValue::Str(s),
        Some(Kind::BoolValue(b)) => AttributeValue::Bool(b),
        Some(Kind::StructValue(s)) => AttributeValue::Map(attributes_from_proto(Some(s))),
        Some(Kind::ListValue(list)) => {
            AttributeValue::List(list.values.into_iter().map(value_from_proto).collect())
        }
    }
}

pub fn value_to_proto(value: AttributeValue) -> Value {
    let kind = match value {
        AttributeValue::Null => Kind::NullValue(NullValue::NullValue as i32),
        AttributeValue::Bool(b) => Kind::BoolValue(b),
        AttributeValue::Int(v) => Kind::NumberValue(v as f64),
        AttributeValue::Float(v) => Kind::NumberValue(v),
        AttributeValue::Str(s) => Kind::StringValue(s),
        AttributeValue::List(values) => Kind::ListValue(ListValue {
            values: values.into_iter().map(value_to_proto).collect(),
        }),
        AttributeValue::Map(map) => Kind::StructValue(attributes_to_proto(map)),
    };
    Value { kind: Some(kind) }
}

/// An absent struct decodes to an empty map.
pub fn attributes_from_proto(fields: Option<Struct>) -> Attributes {
    fields
        .map(|s| {
            s.fields
                .into_iter()
                .map(|(key, value)| (key, value_from_proto(value)))
                .collect()
        })
        .unwrap_or_default()
}

pub fn attributes_to_proto(attributes: Attributes) -> Struct {
    Struct {
        fields: attributes
            .into_iter()
            .map(|(key, value)| (key, value_to_proto(value)))
            .collect(),
    }
}

fn optional_attributes_to_proto(attributes: Attributes) -> Option<Struct> {
    if attributes.is_empty() {
        None
    } else {
        Some(attributes_to_proto(attributes))
    }
}

// ============================================================================
// Tickets
// ============================================================================

pub fn player_from_proto(player: proto::Player) -> Player {
    Player {
        player_id: player.player_id,
        attributes: attributes_from_proto(player.attributes),
    }
}

pub fn player_to_proto(player: Player) -> proto::Player {
    proto::Player {
        player_id: player.player_id,
        attributes: optional_attributes_to_proto(player.attributes),
    }
}

pub fn ticket_from_proto(ticket: proto::Ticket) -> Ticket {
    Ticket {
        ticket_id: ticket.ticket_id,
        match_pool: ticket.match_pool,
        created_at: ticket.created_at,
        players: ticket.players.into_iter().map(player_from_proto).collect(),
        ticket_attributes: attributes_from_proto(ticket.ticket_attributes),
        latencies: ticket.latencies,
        party_session_id: ticket.party_session_id,
        namespace: ticket.namespace,
    }
}

pub fn ticket_to_proto(ticket: Ticket) -> proto::Ticket {
    proto::Ticket {
        ticket_id: ticket.ticket_id,
        match_pool: ticket.match_pool,
        created_at: ticket.created_at,
        players: ticket.players.into_iter().map(player_to_proto).collect(),
        ticket_attributes: optional_attributes_to_proto(ticket.ticket_attributes),
        latencies: ticket.latencies,
        party_session_id: ticket.party_session_id,
        namespace: ticket.namespace,
    }
}
