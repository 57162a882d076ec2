//! UDP echo over a TUN device
//!
//! Opens `tun0`, decodes every incoming UDP datagram and sends the
//! payload straight back with the endpoints swapped. Run as root and
//! give the interface an address first, e.g.:
//!
//! ```bash
//! sudo ip addr add 10.0.0.254/24 dev tun0 && sudo ip link set tun0 up
//! ```

use tracing::{info, warn};
use tun_udp::{Error, TunDevice};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let device = TunDevice::open("tun0")?;
    info!("listening on {}", device.name());

    let mut rx_buf = [0u8; 1504]; // MTU + some overhead
    let mut tx_buf = [0u8; 1504];
    let mut ip_id = 0u16;

    loop {
        let datagram = match device.recv_udp(&mut rx_buf) {
            Ok(datagram) => datagram,
            Err(Error::Codec(e)) if e.is_transient() => {
                warn!("dropping frame: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        info!(
            "echoing {} bytes back to {}",
            datagram.payload.len(),
            datagram.src
        );

        // Reply goes out with the roles reversed
        let (src, dst) = (datagram.dst, datagram.src);
        let (_, next_id) = device.send_udp(&mut tx_buf, &src, &dst, datagram.payload, ip_id)?;
        ip_id = next_id;
    }
}
