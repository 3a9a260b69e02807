use crate::http_client;
use rss::Channel;

#[derive(Debug, Eq, PartialEq)]
pub enum FeedReaderError {
    RequestError { msg: String },
    ParseError { msg: String },
}

// Field values stay literal text at this stage; dates are parsed when the
// item is turned into a post.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FetchedFeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct FetchedFeed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: Option<String>,
    pub items: Vec<FetchedFeedItem>,
}

pub struct RssReader {
    pub url: String,
}

impl RssReader {
    pub async fn read(&self) -> Result<FetchedFeed, FeedReaderError> {
        let body = read_url(&self.url).await?;

        match Channel::read_from(body.as_bytes()) {
            Ok(channel) => Ok(FetchedFeed::from(channel)),
            Err(error) => {
                let msg = format!("{}", error);

                Err(FeedReaderError::ParseError { msg })
            }
        }
    }
}

pub async fn read_url(url: &str) -> Result<String, FeedReaderError> {
    let response = http_client::client()
        .get(url)
        .send()
        .await
        .map_err(|error| FeedReaderError::RequestError {
            msg: format!("{:?}", error),
        })?;

    response
        .text()
        .await
        .map_err(|error| FeedReaderError::RequestError {
            msg: format!("{:?}", error),
        })
}

impl From<Channel> for FetchedFeed {
    fn from(channel: Channel) -> Self {
        let mut items = channel
            .items()
            .iter()
            .filter(|item| item.link().is_some())
            .map(|item| FetchedFeedItem {
                title: item
                    .title()
                    .map_or_else(|| "".to_string(), |s| s.to_string()),
                link: item.link().unwrap().to_string(),
                description: item
                    .description()
                    .map_or_else(|| "".to_string(), |s| s.to_string()),
                pub_date: item
                    .pub_date()
                    .map_or_else(|| "".to_string(), |s| s.to_string()),
            })
            .collect::<Vec<FetchedFeedItem>>();

        items.dedup_by(|a, b| a.link == b.link && a.title == b.title);

        FetchedFeed {
            title: channel.title().to_string(),
            link: channel.link().to_string(),
            description: channel.description().to_string(),
            language: channel.language().map(|s| s.to_string()),
            items,
        }
    }
}
