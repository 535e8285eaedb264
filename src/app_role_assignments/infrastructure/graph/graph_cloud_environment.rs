use std::str::FromStr;

/// National cloud the directory tenant lives in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GraphCloudEnvironment {
    #[default]
    Public,
    UsGovernment,
    China,
}

impl GraphCloudEnvironment {
    pub fn graph_endpoint(&self) -> &'static str {
        match self {
            Self::Public => "https://graph.microsoft.com",
            Self::UsGovernment => "https://graph.microsoft.us",
            Self::China => "https://microsoftgraph.chinacloudapi.cn",
        }
    }

    pub fn login_endpoint(&self) -> &'static str {
        match self {
            Self::Public => "https://login.microsoftonline.com",
            Self::UsGovernment => "https://login.microsoftonline.us",
            Self::China => "https://login.chinacloudapi.cn",
        }
    }
}

impl FromStr for GraphCloudEnvironment {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "public" | "global" => Ok(Self::Public),
            "usgovernment" | "usgov" => Ok(Self::UsGovernment),
            "china" => Ok(Self::China),
            _ => Err(()),
        }
    }
}
