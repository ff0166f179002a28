//! Platform tags and the channel -> platform resolver.
//!
//! Presence is scoped per platform lobby: the `pc`, `ps4` and `xbox-one`
//! channels each map to a platform tag, and platform-scoped commands issued
//! anywhere else are rejected with guidance instead of guessing.

use std::fmt;

use serenity::model::id::ChannelId;

/// One of the three platform lobbies. The wire tag is the exact string stored
/// on a profile and matched by the online-roster query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Pc,
    Ps4,
    Xbox,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Pc, Platform::Ps4, Platform::Xbox];

    pub fn tag(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Ps4 => "PS4",
            Platform::Xbox => "XBOX",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PC" => Some(Platform::Pc),
            "PS4" => Some(Platform::Ps4),
            "XBOX" => Some(Platform::Xbox),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Channels resolved once at ready from their guild names. Any channel the
/// guild is missing stays `None` and the dependent feature degrades with a
/// logged warning rather than a panic.
#[derive(Debug, Clone, Default)]
pub struct GuildChannels {
    pub general: Option<ChannelId>,
    pub roles: Option<ChannelId>,
    pub commands: Option<ChannelId>,
    pub bulletin: Option<ChannelId>,
    pub pc: Option<ChannelId>,
    pub ps4: Option<ChannelId>,
    pub xbox: Option<ChannelId>,
}

impl GuildChannels {
    /// Builds the mapping from `(name, id)` pairs as returned by the gateway.
    pub fn from_names<I>(channels: I) -> Self
    where
        I: IntoIterator<Item = (String, ChannelId)>,
    {
        let mut out = Self::default();
        for (name, id) in channels {
            match name.as_str() {
                "general" => out.general = Some(id),
                "roles" => out.roles = Some(id),
                "commands" => out.commands = Some(id),
                "bulletin" => out.bulletin = Some(id),
                "pc" => out.pc = Some(id),
                "ps4" => out.ps4 = Some(id),
                "xbox-one" => out.xbox = Some(id),
                _ => {}
            }
        }
        out
    }

    /// Maps the channel an interaction arrived in to a platform scope.
    /// Returns `None` for every channel outside the three lobbies.
    pub fn resolve(&self, channel: ChannelId) -> Option<Platform> {
        if self.pc == Some(channel) {
            Some(Platform::Pc)
        } else if self.ps4 == Some(channel) {
            Some(Platform::Ps4)
        } else if self.xbox == Some(channel) {
            Some(Platform::Xbox)
        } else {
            None
        }
    }

    pub fn platform_channel(&self, platform: Platform) -> Option<ChannelId> {
        match platform {
            Platform::Pc => self.pc,
            Platform::Ps4 => self.ps4,
            Platform::Xbox => self.xbox,
        }
    }

    /// Guidance shown when a platform-scoped command is used outside the
    /// three lobbies, naming each valid channel.
    pub fn scope_guidance(&self, command: &str) -> String {
        let mention = |ch: Option<ChannelId>| match ch {
            Some(id) => format!("<#{id}>"),
            None => "*(channel missing)*".to_string(),
        };
        format!(
            "Please use the `/{command}` command only in:\n{}\n{}\n{}",
            mention(self.pc),
            mention(self.ps4),
            mention(self.xbox),
        )
    }
}
