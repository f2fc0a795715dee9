use crate::error::{FeedError, FeedResult};
use crate::feeds::json::record_to_property;
use crate::feeds::traits::FeedSource;
use crate::feeds::types::FeedParams;
use crate::models::Property;
use async_trait::async_trait;
use reqwest::Client;
use roxmltree::{Document, Node};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Element names that hold one listing each
const RECORD_TAGS: [&str; 3] = ["property", "listing", "item"];

/// Listing feed served as an XML document
///
/// Records are `<property>`, `<listing>` or `<item>` elements. Their
/// attributes and child elements go through the same field mapping as the
/// JSON feed, so `<ref>`, `<town>`, `<bedrooms>` and friends all work.
pub struct XmlFeed {
    client: Client,
    params: FeedParams,
}

impl XmlFeed {
    pub fn new(params: FeedParams) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent.clone())
            .build()?;

        Ok(Self { client, params })
    }
}

#[async_trait]
impl FeedSource for XmlFeed {
    async fn fetch(&self) -> FeedResult<Vec<Property>> {
        debug!("Fetching XML feed: {}", self.params.url);

        let response = self.client.get(&self.params.url).send().await?;

        if !response.status().is_success() {
            warn!("XML feed returned status: {}", response.status());
            return Err(FeedError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of XML", body.len());

        let properties = parse_xml_feed(&body, &self.params.currency)?;
        if properties.is_empty() {
            warn!("No listing records found in XML feed");
        } else {
            debug!("Parsed {} properties from XML feed", properties.len());
        }
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "xml"
    }
}

/// Parses an XML listing document into properties, in document order
///
/// Records nested inside another record (an `<item>` in an image list, say)
/// are not listings of their own. Records without an id are skipped.
pub fn parse_xml_feed(body: &str, currency: &str) -> FeedResult<Vec<Property>> {
    let document = Document::parse(body)?;

    let mut properties = Vec::new();
    let records = document
        .root_element()
        .descendants()
        .filter(|node| is_record(*node) && !node.ancestors().skip(1).any(is_record));

    for (index, node) in records.enumerate() {
        match record_to_property(&record_value(node), currency) {
            Some(property) => properties.push(property),
            None => debug!("Skipping XML record {} without an id", index),
        }
    }

    Ok(properties)
}

fn is_record(node: Node) -> bool {
    node.is_element() && RECORD_TAGS.contains(&node.tag_name().name())
}

/// Flattens a record element into the object shape the JSON mapping reads
///
/// Attributes and leaf children become strings; a child with element
/// children (`<images><image>..</image></images>`) becomes a list. The first
/// occurrence of a name wins.
fn record_value(node: Node) -> Value {
    let mut map = Map::new();

    for attribute in node.attributes() {
        map.entry(attribute.name())
            .or_insert_with(|| Value::String(attribute.value().trim().to_string()));
    }

    for child in node.children().filter(Node::is_element) {
        let value = if child.children().any(|n| n.is_element()) {
            Value::Array(
                child
                    .children()
                    .filter(Node::is_element)
                    .filter_map(entry_text)
                    .map(Value::String)
                    .collect(),
            )
        } else {
            match element_text(child) {
                Some(text) => Value::String(text),
                None => continue,
            }
        };
        map.entry(child.tag_name().name()).or_insert(value);
    }

    Value::Object(map)
}

/// Text of a list entry: its own text, a `url` attribute or a `<url>` child
fn entry_text(entry: Node) -> Option<String> {
    element_text(entry)
        .or_else(|| entry.attribute("url").map(|url| url.trim().to_string()))
        .or_else(|| {
            entry
                .children()
                .find(|n| n.has_tag_name("url"))
                .and_then(element_text)
        })
}

fn element_text(node: Node) -> Option<String> {
    let text: String = node
        .children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingStatus, PriceFrequency};

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <root>
          <kyero><feed_version>3</feed_version></kyero>
          <property>
            <id>X-1</id>
            <title><![CDATA[Casa de pueblo]]></title>
            <town>Oliva</town>
            <province>Valencia</province>
            <price>210000</price>
            <price_freq>sale</price_freq>
            <type>Townhouse</type>
            <beds>3</beds>
            <baths>2</baths>
            <surface>140</surface>
            <latitude>38.92</latitude>
            <longitude>-0.12</longitude>
            <status>Under-Offer</status>
            <date>2024-02-11 09:30:00</date>
            <images>
              <image id="1"><url>https://img.example.com/x1-a.jpg</url></image>
              <image id="2"><url>https://img.example.com/x1-b.jpg</url></image>
            </images>
          </property>
          <property ref="X-2" status="reserved">
            <name>Piso centro</name>
            <location>Gandía, Valencia</location>
            <price>€750</price>
            <price_freq>month</price_freq>
          </property>
        </root>"#;

    #[test]
    fn maps_child_elements_and_attributes() {
        let properties = parse_xml_feed(FEED, "€").unwrap();
        assert_eq!(properties.len(), 2);

        let house = &properties[0];
        assert_eq!(house.id, "X-1");
        assert_eq!(house.title, "Casa de pueblo");
        assert_eq!(house.location, "Oliva, Valencia");
        assert_eq!(house.price, "€210,000");
        assert_eq!(house.property_type, "Townhouse");
        assert_eq!(house.beds, 3);
        assert_eq!(house.baths, 2);
        assert_eq!(house.size, "140 m²");
        assert_eq!(house.image, "https://img.example.com/x1-a.jpg");
        assert_eq!(house.date_listed, "2024-02-11");
        assert_eq!(house.status.as_str(), "Under-Offer");
        assert_eq!(house.coordinates().map(|c| c.lng), Some(-0.12));

        let flat = &properties[1];
        assert_eq!(flat.id, "X-2");
        assert_eq!(flat.title, "Piso centro");
        assert_eq!(flat.zone(), "Gandía");
        assert_eq!(flat.status, ListingStatus::Reserved);
        assert_eq!(flat.price_freq, PriceFrequency::Month);
        assert_eq!(flat.coordinates(), None);
    }

    #[test]
    fn skips_records_without_id() {
        let body = r#"<listings>
            <listing><title>no id</title></listing>
            <listing><id>  </id></listing>
            <listing id="kept"><images><item>https://img.example.com/k.jpg</item></images></listing>
        </listings>"#;

        let properties = parse_xml_feed(body, "€").unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, "kept");
        assert_eq!(properties[0].image, "https://img.example.com/k.jpg");
        assert_eq!(properties[0].status, ListingStatus::default());
    }

    #[test]
    fn document_without_records_is_empty() {
        assert!(parse_xml_feed("<properties/>", "€").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(parse_xml_feed("<root><property>", "€"), Err(FeedError::Xml(_))));
        assert!(matches!(parse_xml_feed("not xml at all", "€"), Err(FeedError::Xml(_))));
    }
}
