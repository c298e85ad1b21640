use shellfish_userauth::transport::*;
use shellfish_userauth::user_auth::*;
use shellfish_userauth::util::codec::*;
use tokio::task::JoinHandle;

/// The peer's next action.
#[derive(Clone, Debug)]
pub enum Reply {
    /// Accept the requested service.
    ServiceAccept,
    /// `SSH_MSG_USERAUTH_PK_OK` repeating the request's algorithm and key.
    KeyOk,
    /// `SSH_MSG_USERAUTH_PK_OK` with the given algorithm and key.
    KeyOkFor(&'static str, Vec<u8>),
    Failure(Vec<&'static str>),
    PartialSuccess(Vec<&'static str>),
    Success,
    /// Send a banner without waiting for a request.
    Banner(&'static str),
    /// Reply with an arbitrary message payload.
    Raw(Vec<u8>),
}

/// A `publickey` request as received by the peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub user_name: String,
    pub service_name: String,
    pub algorithm: String,
    pub key: Vec<u8>,
    pub signature: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

#[derive(Debug)]
pub struct Transcript {
    pub requests: Vec<Request>,
    /// Whether another message arrived after the script had been played.
    pub trailing: bool,
}

struct Raw<'a>(&'a [u8]);

impl<'a> SshEncode for Raw<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bytes(self.0)
    }
}

async fn reply<M: SshEncode>(t: &mut TestTransport, msg: &M) {
    TransportExt::send(t, msg).await.unwrap();
    TransportExt::flush(t).await.unwrap();
}

/// Play `script` against the client on the other end of `t`.
///
/// The peer finishes when the client end has been dropped after the script is done.
pub fn spawn_peer(mut t: TestTransport, script: Vec<Reply>) -> JoinHandle<Transcript> {
    tokio::spawn(async move {
        let mut requests = vec![];
        for step in script {
            match step {
                Reply::Banner(message) => {
                    let language = "";
                    reply(&mut t, &MsgBanner { message, language }).await;
                    continue;
                }
                Reply::ServiceAccept => {
                    let msg = TransportExt::receive(&mut t).await.unwrap();
                    let req: MsgServiceRequest = SshCodec::decode(&msg).unwrap();
                    reply(&mut t, &MsgServiceAccept(req.0)).await;
                    continue;
                }
                _ => (),
            }
            let payload = TransportExt::receive(&mut t).await.unwrap();
            let msg: MsgUserAuthRequest<PublicKeyMethod> = SshCodec::decode(&payload).unwrap();
            let req = Request {
                user_name: msg.user_name.into(),
                service_name: msg.service_name.into(),
                algorithm: msg.method.algorithm.into(),
                key: msg.method.key.into(),
                signature: msg.method.signature.map(Into::into),
                payload: payload.clone(),
            };
            match step {
                Reply::KeyOk => {
                    let algorithm = req.algorithm.as_str();
                    let key = req.key.as_slice();
                    reply(&mut t, &MsgPkOk { algorithm, key }).await
                }
                Reply::KeyOkFor(algorithm, ref key) => {
                    reply(&mut t, &MsgPkOk { algorithm, key }).await
                }
                Reply::Failure(ref methods) => {
                    let methods = methods.clone();
                    let partial_success = false;
                    reply(&mut t, &MsgFailure { methods, partial_success }).await
                }
                Reply::PartialSuccess(ref methods) => {
                    let methods = methods.clone();
                    let partial_success = true;
                    reply(&mut t, &MsgFailure { methods, partial_success }).await
                }
                Reply::Success => reply(&mut t, &MsgSuccess).await,
                Reply::Raw(ref payload) => reply(&mut t, &Raw(payload)).await,
                Reply::Banner(_) | Reply::ServiceAccept => unreachable!(),
            }
            requests.push(req);
        }
        let trailing = TransportExt::receive(&mut t).await.is_ok();
        Transcript { requests, trailing }
    })
}

/// The data a client has to sign for `req` (session id and request without signature).
pub fn signed_data(session_id: &SessionId, req: &Request) -> Vec<u8> {
    let signature = req.signature.as_ref().unwrap();
    let len = req.payload.len() - 4 - signature.len();
    let mut data = SshCodec::encode(session_id).unwrap();
    data.extend_from_slice(&req.payload[..len]);
    data
}
