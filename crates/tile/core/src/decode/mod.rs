//! Tile-code decoder.
//!
//! A tile code is a `;`-separated list of `type=key:value,key:value` segments.
//! Segments decode left to right into an arena of [`Part`]s. Cities, towns,
//! offboards, labels, upgrades and junctions are also appended to a cache so
//! that a later path can name them with `_N`, the N-th cached part.
//!
//! ```text
//! city=revenue:30;path=a:0,b:_0   -> [City, Path(Edge 0 -> part[0])]
//! ```
//!
//! Unknown segment types are dropped with a warning rather than rejected.
mod params;

use crate::edge::Edge;
use crate::error::{EngineError, ErrorSeverity};
use crate::part::{
    Border, BorderKind, City, Endpoint, Icon, Junction, Label, Offboard, Part, PartRef, Path,
    Revenue, RevenueCenter, RouteEligibility, TrackKind, Town, Upgrade,
};

use params::{Params, Segment, back_reference};

/// Errors raised while decoding a tile code. Tile codes come from static
/// catalogs, so every one of these means corrupt data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodeError {
    /// `_N` where fewer than N+1 parts have been cached so far.
    #[error("back-reference _{index} out of range ({cached} parts cached)")]
    BackReferenceOutOfRange { index: usize, cached: usize },

    /// `_N` names a cached part that cannot terminate a path (a label, an upgrade).
    #[error("back-reference _{index} does not name a city, town, offboard or junction")]
    InvalidEndpoint { index: usize },

    #[error("{part} is missing required parameter '{key}'")]
    MissingParam {
        part: &'static str,
        key: &'static str,
    },

    #[error("{part} has invalid {key} '{value}'")]
    InvalidValue {
        part: &'static str,
        key: &'static str,
        value: String,
    },
}

impl EngineError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use DecodeError::*;
        match self {
            BackReferenceOutOfRange { .. } => "DECODE_BACK_REFERENCE_OUT_OF_RANGE",
            InvalidEndpoint { .. } => "DECODE_INVALID_ENDPOINT",
            MissingParam { .. } => "DECODE_MISSING_PARAM",
            InvalidValue { .. } => "DECODE_INVALID_VALUE",
        }
    }
}

/// Decodes a tile code into its ordered part arena.
///
/// Path endpoints written as `_N` become [`Endpoint::Node`] pointing at the
/// arena slot of the N-th cached part.
pub fn decode(code: &str) -> Result<Vec<Part>, DecodeError> {
    let mut decoder = Decoder::default();
    for segment in code.split(';').filter_map(Segment::parse) {
        decoder.push(segment)?;
    }

    tracing::trace!(code, parts = decoder.parts.len(), "decoded tile code");
    Ok(decoder.parts)
}

#[derive(Default)]
struct Decoder {
    parts: Vec<Part>,
    /// Arena slots of back-referenceable parts, in cache order.
    cache: Vec<PartRef>,
}

impl Decoder {
    fn push(&mut self, segment: Segment<'_>) -> Result<(), DecodeError> {
        let part = match segment.kind {
            "path" => Part::Path(self.path(segment.params)?),
            "city" => Part::City(city(segment.params)?),
            "town" => Part::Town(town(segment.params)?),
            "offboard" => Part::Offboard(offboard(segment.params)?),
            "label" => Part::Label(Label::new(segment.raw)),
            "upgrade" => Part::Upgrade(upgrade(segment.params)?),
            "border" => Part::Border(border(segment.params)?),
            "junction" => Part::Junction(Junction::default()),
            "icon" => Part::Icon(icon(segment.params)?),
            other => {
                tracing::warn!(segment = other, "ignoring unknown tile part type");
                return Ok(());
            }
        };

        let slot = PartRef(self.parts.len());
        if part.is_back_referenceable() {
            self.cache.push(slot);
        }
        self.parts.push(part);
        Ok(())
    }

    fn path(&self, params: Params<'_>) -> Result<Path, DecodeError> {
        warn_unknown("path", params, &["a", "b", "terminal", "track"]);

        let a = self.endpoint(params.require("path", "a")?, "a")?;
        let b = self.endpoint(params.require("path", "b")?, "b")?;

        let mut path = Path::new(a, b);
        if let Some(terminal) = params.parse::<u8>("path", "terminal")? {
            path = path.with_terminal(terminal);
        }
        if let Some(track) = params.parse::<TrackKind>("path", "track")? {
            path = path.with_track(track);
        }
        Ok(path)
    }

    fn endpoint(&self, token: &str, key: &'static str) -> Result<Endpoint, DecodeError> {
        let invalid = || DecodeError::InvalidValue {
            part: "path",
            key,
            value: token.to_string(),
        };

        let Some(index) = back_reference(token) else {
            return token.parse::<Edge>().map(Endpoint::Edge).map_err(|_| invalid());
        };
        let index = index.map_err(|_| invalid())?;

        let slot = *self
            .cache
            .get(index)
            .ok_or(DecodeError::BackReferenceOutOfRange {
                index,
                cached: self.cache.len(),
            })?;
        let kind = self.parts[slot.0]
            .node_kind()
            .ok_or(DecodeError::InvalidEndpoint { index })?;

        Ok(Endpoint::node(slot, kind))
    }
}

const CENTER_KEYS: [&str; 6] = ["revenue", "groups", "hide", "visit_cost", "route", "format"];
const CITY_KEYS: [&str; 8] = [
    "revenue",
    "groups",
    "hide",
    "visit_cost",
    "route",
    "format",
    "slots",
    "loc",
];
const TOWN_KEYS: [&str; 7] = [
    "revenue",
    "groups",
    "hide",
    "visit_cost",
    "route",
    "format",
    "loc",
];

fn revenue_center(part: &'static str, params: Params<'_>) -> Result<RevenueCenter, DecodeError> {
    let revenue = params.require(part, "revenue")?;
    let revenue = revenue
        .parse::<Revenue>()
        .map_err(|_| DecodeError::InvalidValue {
            part,
            key: "revenue",
            value: revenue.to_string(),
        })?;

    let mut center = RevenueCenter::new(revenue);
    center.groups = params.list("groups");
    center.hidden = params.flag("hide");
    if let Some(cost) = params.parse::<u32>(part, "visit_cost")? {
        center.visit_cost = cost;
    }
    if let Some(route) = params.parse::<RouteEligibility>(part, "route")? {
        center.route = route;
    }
    center.format = params.get("format").map(str::to_string);
    Ok(center)
}

fn city(params: Params<'_>) -> Result<City, DecodeError> {
    warn_unknown("city", params, &CITY_KEYS);

    let slots = params
        .parse::<usize>("city", "slots")?
        .unwrap_or(City::DEFAULT_SLOTS);
    if slots > City::MAX_SLOTS {
        return Err(DecodeError::InvalidValue {
            part: "city",
            key: "slots",
            value: slots.to_string(),
        });
    }
    let mut city = City::new(revenue_center("city", params)?, slots);
    if let Some(loc) = params.parse::<Edge>("city", "loc")? {
        city = city.with_loc(loc);
    }
    Ok(city)
}

fn town(params: Params<'_>) -> Result<Town, DecodeError> {
    warn_unknown("town", params, &TOWN_KEYS);

    let mut town = Town::new(revenue_center("town", params)?);
    if let Some(loc) = params.parse::<Edge>("town", "loc")? {
        town = town.with_loc(loc);
    }
    Ok(town)
}

fn offboard(params: Params<'_>) -> Result<Offboard, DecodeError> {
    warn_unknown("offboard", params, &CENTER_KEYS);
    Ok(Offboard::new(revenue_center("offboard", params)?))
}

fn upgrade(params: Params<'_>) -> Result<Upgrade, DecodeError> {
    warn_unknown("upgrade", params, &["cost", "terrain"]);

    let cost = params.parse::<u32>("upgrade", "cost")?.unwrap_or(0);
    Ok(Upgrade::new(cost, params.list("terrain")))
}

fn border(params: Params<'_>) -> Result<Border, DecodeError> {
    warn_unknown("border", params, &["edge", "type", "cost"]);

    let edge = params
        .parse::<Edge>("border", "edge")?
        .ok_or(DecodeError::MissingParam {
            part: "border",
            key: "edge",
        })?;
    let mut border = Border::new(edge);
    if let Some(kind) = params.parse::<BorderKind>("border", "type")? {
        border = border.with_kind(kind);
    }
    if let Some(cost) = params.parse::<u32>("border", "cost")? {
        border = border.with_cost(cost);
    }
    Ok(border)
}

fn icon(params: Params<'_>) -> Result<Icon, DecodeError> {
    warn_unknown("icon", params, &["image", "name", "sticky", "blocks_lay"]);

    let mut icon = Icon::new(params.require("icon", "image")?);
    if let Some(name) = params.get("name") {
        icon = icon.with_name(name);
    }
    icon.sticky = params.flag("sticky");
    icon.blocks_lay = params.flag("blocks_lay");
    Ok(icon)
}

fn warn_unknown(part: &'static str, params: Params<'_>, known: &[&str]) {
    for key in params.unknown_keys(known) {
        tracing::trace!(part, key, "ignoring unknown tile part parameter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{NodeKind, PartKind};

    fn kinds(parts: &[Part]) -> Vec<PartKind> {
        parts.iter().map(Part::kind).collect()
    }

    #[test]
    fn city_back_reference() {
        let parts = decode("city=revenue:30;path=a:0,b:_0").unwrap();
        assert_eq!(kinds(&parts), vec![PartKind::City, PartKind::Path]);

        let city = parts[0].as_city().unwrap();
        assert_eq!(city.center.revenue, Revenue::Flat(30));
        assert_eq!(city.slots, 1);

        let path = parts[1].as_path().unwrap();
        assert_eq!(path.a, Endpoint::Edge(Edge::new(0)));
        assert_eq!(path.b, Endpoint::node(PartRef(0), NodeKind::City));
    }

    #[test]
    fn cache_index_differs_from_arena_slot() {
        // The border and first path are not cached, so _1 is the town at slot 3.
        let parts =
            decode("city=revenue:20;border=edge:2;path=a:0,b:_0;town=revenue:10;path=a:3,b:_1")
                .unwrap();
        let path = parts[4].as_path().unwrap();
        assert_eq!(path.b, Endpoint::node(PartRef(3), NodeKind::Town));
    }

    #[test]
    fn shared_endpoint_resolves_to_same_slot() {
        let parts = decode("junction;path=a:0,b:_0;path=a:2,b:_0;path=a:4,b:_0").unwrap();
        let junction = Endpoint::node(PartRef(0), NodeKind::Junction);
        for part in &parts[1..] {
            assert_eq!(part.as_path().unwrap().b, junction);
        }
    }

    #[test]
    fn out_of_range_back_reference_is_fatal() {
        let err = decode("city=revenue:20;path=a:0,b:_1").unwrap_err();
        assert_eq!(err, DecodeError::BackReferenceOutOfRange { index: 1, cached: 1 });
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "DECODE_BACK_REFERENCE_OUT_OF_RANGE");
    }

    #[test]
    fn back_reference_to_label_is_not_an_endpoint() {
        let err = decode("label=OO;path=a:0,b:_0").unwrap_err();
        assert_eq!(err, DecodeError::InvalidEndpoint { index: 0 });
    }

    #[test]
    fn unknown_type_is_ignored() {
        let parts = decode("frame=color:red;path=a:0,b:3;stripes=color:white").unwrap();
        assert_eq!(kinds(&parts), vec![PartKind::Path]);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            decode("path=a:0,b:9"),
            Err(DecodeError::InvalidValue { key: "b", .. })
        ));
        assert!(matches!(
            decode("city=revenue:lots"),
            Err(DecodeError::InvalidValue { key: "revenue", .. })
        ));
        assert_eq!(
            decode("path=a:0"),
            Err(DecodeError::MissingParam { part: "path", key: "b" })
        );
        assert!(decode("city=slots:2").is_err());
        assert_eq!(
            decode("city=revenue:20,slots:18446744073709551615"),
            Err(DecodeError::InvalidValue {
                part: "city",
                key: "slots",
                value: "18446744073709551615".to_string(),
            })
        );
        assert!(matches!(
            decode("city=revenue:20,slots:1000000000"),
            Err(DecodeError::InvalidValue { key: "slots", .. })
        ));
        assert!(decode("city=revenue:20,slots:99999999999999999999999").is_err());
        assert_eq!(decode("city=revenue:20,slots:6").unwrap()[0].as_city().unwrap().slots, 6);
    }

    #[test]
    fn decodes_every_part_type() {
        let code = "city=revenue:yellow_20|brown_40,slots:2,groups:NY|East,visit_cost:0,route:optional,loc:1;\
                    town=revenue:10,hide;offboard=revenue:30,format:%d+;label=NY;\
                    upgrade=cost:80,terrain:mountain|water;border=edge:4,type:impassable;\
                    junction;icon=image:18chesapeake/port.svg,sticky:1,blocks_lay;\
                    path=a:0,b:_0,terminal:1,track:narrow";
        let parts = decode(code).unwrap();
        assert_eq!(parts.len(), 9);

        let city = parts[0].as_city().unwrap();
        assert_eq!(city.slots, 2);
        assert_eq!(city.center.groups, vec!["NY".to_string(), "East".to_string()]);
        assert_eq!(city.center.visit_cost, 0);
        assert_eq!(city.center.route, RouteEligibility::Optional);
        assert_eq!(city.loc, Some(Edge::new(1)));
        assert_eq!(city.center.revenue.max(), 40);

        assert!(parts[1].as_town().unwrap().center.hidden);
        assert_eq!(parts[2].as_offboard().unwrap().center.format.as_deref(), Some("%d+"));
        assert_eq!(parts[3].as_label().unwrap().text, "NY");

        let upgrade = parts[4].as_upgrade().unwrap();
        assert_eq!(upgrade.cost, 80);
        assert_eq!(upgrade.terrains, vec!["mountain".to_string(), "water".to_string()]);

        let border = parts[5].as_border().unwrap();
        assert_eq!(border.edge, Edge::new(4));
        assert_eq!(border.kind, Some(BorderKind::Impassable));

        let icon = parts[7].as_icon().unwrap();
        assert_eq!(icon.name, "port");
        assert!(icon.sticky && icon.blocks_lay);

        let path = parts[8].as_path().unwrap();
        assert_eq!(path.terminal, Some(1));
        assert_eq!(path.track, TrackKind::Narrow);
    }

    #[test]
    fn decoding_is_deterministic() {
        let code = "city=revenue:40;city=revenue:40;path=a:0,b:_0;path=a:2,b:_1;label=OO";
        assert_eq!(decode(code).unwrap(), decode(code).unwrap());
    }

    #[test]
    fn empty_code_has_no_parts() {
        assert!(decode("").unwrap().is_empty());
        assert_eq!(decode("path=a:0,b:3;").unwrap().len(), 1);
    }
}
