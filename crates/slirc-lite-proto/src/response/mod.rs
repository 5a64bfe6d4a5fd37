//! Numeric reply codes sent by the relay.

#![allow(non_camel_case_types)]

use std::fmt;
use std::str::FromStr;

/// Server numeric reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // === Connection Registration ===
    /// 001 - Welcome to the network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server name and version
    RPL_MYINFO = 4,

    // === Command Responses ===
    /// 315 - End of WHO list
    RPL_ENDOFWHO = 315,
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES list
    RPL_ENDOFNAMES = 366,

    // === Errors ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 417 - Input line too long
    ERR_INPUTTOOLONG = 417,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
    /// 442 - You're not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 451 - You have not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTRED = 462,
}

const ALL: [Response; 22] = [
    Response::RPL_WELCOME,
    Response::RPL_YOURHOST,
    Response::RPL_CREATED,
    Response::RPL_MYINFO,
    Response::RPL_ENDOFWHO,
    Response::RPL_NOTOPIC,
    Response::RPL_WHOREPLY,
    Response::RPL_NAMREPLY,
    Response::RPL_ENDOFNAMES,
    Response::ERR_NOSUCHNICK,
    Response::ERR_NOSUCHCHANNEL,
    Response::ERR_NORECIPIENT,
    Response::ERR_NOTEXTTOSEND,
    Response::ERR_INPUTTOOLONG,
    Response::ERR_UNKNOWNCOMMAND,
    Response::ERR_NONICKNAMEGIVEN,
    Response::ERR_ERRONEUSNICKNAME,
    Response::ERR_NICKNAMEINUSE,
    Response::ERR_NOTONCHANNEL,
    Response::ERR_NOTREGISTERED,
    Response::ERR_NEEDMOREPARAMS,
    Response::ERR_ALREADYREGISTRED,
];

/// Error returned when a string is not a known numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResponseError;

impl fmt::Display for ParseResponseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown numeric response code")
    }
}

impl std::error::Error for ParseResponseError {}

impl Response {
    /// Numeric value of this response.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Look up a response by its numeric value.
    pub fn from_code(code: u16) -> Option<Response> {
        ALL.iter().copied().find(|r| r.code() == code)
    }

    /// 400-599 are errors.
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseResponseError);
        }
        s.parse::<u16>()
            .ok()
            .and_then(Response::from_code)
            .ok_or(ParseResponseError)
    }
}
