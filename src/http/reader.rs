use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::parser::find_headers_end;

/// Upper bound on the bytes buffered for one request. Anything the peer sends
/// past this is never read.
pub const MAX_REQUEST_SIZE: usize = 1024;

/// Reads one request into `buf`.
///
/// Keeps reading until the header terminator shows up, the peer closes, or
/// `MAX_REQUEST_SIZE` bytes are buffered. Returns the number of bytes held.
/// On an I/O error the bytes read so far stay in `buf`.
pub async fn read_request<R>(stream: &mut R, buf: &mut BytesMut) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut chunk = [0u8; MAX_REQUEST_SIZE];

    while buf.len() < MAX_REQUEST_SIZE && find_headers_end(&buf[..]).is_none() {
        let room = MAX_REQUEST_SIZE - buf.len();
        let n = stream.read(&mut chunk[..room]).await?;

        if n == 0 {
            break;
        }

        buf.extend_from_slice(&chunk[..n]);
    }

    Ok(buf.len())
}
