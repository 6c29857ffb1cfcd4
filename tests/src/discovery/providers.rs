use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use netdiscover_core::fallback::{PUBLIC_IPV4_URL, PUBLIC_IPV6_URL};
use netdiscover_core::providers::{aliyun, aws, azure, digitalocean, gcp};
use netdiscover_core::{ErrorKind, Provider, discoverer_for};
use netdiscover_core::testing::{MockInterfaces, MockResolver, MockTransport, RecordedRequest};

use crate::support::{context, lan};

#[test]
fn aws_facets_hit_instance_metadata() {
    let transport = MockTransport::new()
        .with_body(aws::PRIVATE_IPV4_URL, "172.31.5.9")
        .with_body(aws::PUBLIC_IPV4_URL, "54.12.0.77")
        .with_body(aws::HOSTNAME_URL, "ec2-54-12-0-77.compute-1.amazonaws.com");
    let discoverer = aws::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.private_ipv4().unwrap(), Ipv4Addr::new(172, 31, 5, 9));
    assert_eq!(discoverer.public_ipv4().unwrap(), Ipv4Addr::new(54, 12, 0, 77));
    assert_eq!(discoverer.hostname().unwrap(), "ec2-54-12-0-77.compute-1.amazonaws.com");

    assert_eq!(
        transport.requests(),
        vec![
            RecordedRequest::new(aws::PRIVATE_IPV4_URL, &[]),
            RecordedRequest::new(aws::PUBLIC_IPV4_URL, &[]),
            RecordedRequest::new(aws::HOSTNAME_URL, &[]),
        ]
    );
}

#[test]
fn aws_urls_are_exact() {
    assert_eq!(aws::PRIVATE_IPV4_URL, "http://169.254.169.254/latest/meta-data/local-ipv4");
    assert_eq!(aws::PUBLIC_IPV4_URL, "http://169.254.169.254/latest/meta-data/public-ipv4");
    assert_eq!(aws::HOSTNAME_URL, "http://169.254.169.254/latest/meta-data/public-hostname");
}

#[test]
fn azure_facets_send_metadata_header() {
    let transport = MockTransport::new()
        .with_body(azure::PRIVATE_IPV4_URL, "10.1.0.4")
        .with_body(azure::PUBLIC_IPV4_URL, "20.30.40.50");
    let discoverer = azure::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.private_ipv4().unwrap(), Ipv4Addr::new(10, 1, 0, 4));
    assert_eq!(discoverer.public_ipv4().unwrap(), Ipv4Addr::new(20, 30, 40, 50));

    let metadata = [("Metadata", "true")];
    assert_eq!(
        transport.requests(),
        vec![
            RecordedRequest::new(azure::PRIVATE_IPV4_URL, &metadata),
            RecordedRequest::new(azure::PUBLIC_IPV4_URL, &metadata),
        ]
    );
    assert_eq!(
        azure::PRIVATE_IPV4_URL,
        "http://169.254.169.254/metadata/instance/network/interface/0/ipv4/ipAddress/0/privateIpAddress?api-version=2017-08-01&format=text"
    );
    assert_eq!(
        azure::PUBLIC_IPV4_URL,
        "http://169.254.169.254/metadata/instance/network/interface/0/ipv4/ipAddress/0/publicIpAddress?api-version=2017-08-01&format=text"
    );
}

#[test]
fn azure_hostname_reverse_resolves_azure_public_address() {
    let transport = MockTransport::new().with_body(azure::PUBLIC_IPV4_URL, "20.30.40.50");
    let resolver = MockResolver::new().answer("20.30.40.50", &["vm1.westeurope.cloudapp.azure.com."]);
    let discoverer = azure::discoverer(context(&transport, &resolver, &lan()));

    assert_eq!(discoverer.hostname().unwrap(), "vm1.westeurope.cloudapp.azure.com");
    assert_eq!(resolver.lookups(), vec!["20.30.40.50".parse::<IpAddr>().unwrap()]);
    assert_eq!(transport.urls(), vec![azure::PUBLIC_IPV4_URL.to_string()]);
}

#[test]
fn azure_public_ipv6_uses_generic_service() {
    let transport =
        MockTransport::new().with_body(PUBLIC_IPV6_URL, r#"{"address":"2603:1030::12"}"#);
    let discoverer = azure::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.public_ipv6().unwrap(), "2603:1030::12".parse::<Ipv6Addr>().unwrap());
    assert_eq!(transport.requests(), vec![RecordedRequest::new(PUBLIC_IPV6_URL, &[])]);
}

#[test]
fn gcp_facets_send_flavor_header() {
    let transport = MockTransport::new()
        .with_body(gcp::PRIVATE_IPV4_URL, "10.128.0.2")
        .with_body(gcp::PUBLIC_IPV4_URL, "34.70.1.2")
        .with_body(gcp::HOSTNAME_URL, "vm-1.us-central1-a.c.project.internal");
    let discoverer = gcp::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.private_ipv4().unwrap(), Ipv4Addr::new(10, 128, 0, 2));
    assert_eq!(discoverer.public_ipv4().unwrap(), Ipv4Addr::new(34, 70, 1, 2));
    assert_eq!(discoverer.hostname().unwrap(), "vm-1.us-central1-a.c.project.internal");

    let flavor = [("Metadata-Flavor", "Google")];
    assert_eq!(
        transport.requests(),
        vec![
            RecordedRequest::new(
                "http://metadata.google.internal/computeMetadata/v1/instance/network-interfaces/0/ip",
                &flavor
            ),
            RecordedRequest::new(
                "http://metadata.google.internal/computeMetadata/v1/instance/network-interfaces/0/access-configs/0/external-ip",
                &flavor
            ),
            RecordedRequest::new(
                "http://metadata.google.internal/computeMetadata/v1/instance/hostname",
                &flavor
            ),
        ]
    );
}

#[test]
fn aliyun_facets_hit_metadata_server() {
    let transport = MockTransport::new()
        .with_body(aliyun::PRIVATE_IPV4_URL, "192.168.0.10")
        .with_body(aliyun::PUBLIC_IPV4_URL, "47.100.1.1")
        .with_body(aliyun::HOSTNAME_URL, "iZbp1abcdefZ.example");
    let discoverer = aliyun::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.private_ipv4().unwrap(), Ipv4Addr::new(192, 168, 0, 10));
    assert_eq!(discoverer.public_ipv4().unwrap(), Ipv4Addr::new(47, 100, 1, 1));
    assert_eq!(discoverer.hostname().unwrap(), "iZbp1abcdefZ.example");
    assert_eq!(
        transport.urls(),
        vec![
            "http://100.100.100.200/latest/meta-data/private-ipv4".to_string(),
            "http://100.100.100.200/latest/meta-data/eipv4".to_string(),
            "http://100.100.100.200/latest/meta-data/hostname".to_string(),
        ]
    );
    assert!(transport.requests().iter().all(|request| request.headers.is_empty()));
}

#[test]
fn digitalocean_facets_hit_droplet_metadata() {
    let transport = MockTransport::new()
        .with_body(digitalocean::HOSTNAME_URL, "droplet-1")
        .with_body(digitalocean::PUBLIC_IPV4_URL, "159.89.1.2")
        .with_body(digitalocean::PUBLIC_IPV6_URL, "2a03:b0c0:3:d0::1b:1");
    let discoverer = digitalocean::discoverer(context(&transport, &MockResolver::new(), &lan()));

    assert_eq!(discoverer.hostname().unwrap(), "droplet-1");
    assert_eq!(discoverer.public_ipv4().unwrap(), Ipv4Addr::new(159, 89, 1, 2));
    assert_eq!(
        discoverer.public_ipv6().unwrap(),
        "2a03:b0c0:3:d0::1b:1".parse::<Ipv6Addr>().unwrap()
    );
    assert_eq!(
        transport.urls(),
        vec![
            "http://169.254.169.254/metadata/v1/hostname".to_string(),
            "http://169.254.169.254/metadata/v1/interfaces/public/0/ipv4/address".to_string(),
            "http://169.254.169.254/metadata/v1/interfaces/public/0/ipv6/address".to_string(),
        ]
    );
}

#[test]
fn providers_without_private_ipv4_enumerate_interfaces() {
    let transport = MockTransport::new();
    let interfaces = lan();
    let discoverer = digitalocean::discoverer(context(&transport, &MockResolver::new(), &interfaces));

    assert_eq!(discoverer.private_ipv4().unwrap(), Ipv4Addr::new(172, 31, 5, 9));
    assert_eq!(interfaces.enumerations(), 1);
    assert!(transport.requests().is_empty());
}

#[test]
fn providers_with_private_ipv4_do_not_enumerate_interfaces() {
    for provider in [Provider::Aws, Provider::Azure, Provider::Gcp, Provider::Aliyun] {
        let transport = MockTransport::new();
        let interfaces = lan();
        let discoverer =
            discoverer_for(Some(provider), context(&transport, &MockResolver::new(), &interfaces));

        let err = discoverer.private_ipv4().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport, "{provider}");
        assert_eq!(interfaces.enumerations(), 0, "{provider}");
        assert_eq!(transport.requests().len(), 1, "{provider}");
    }
}

#[test]
fn public_ipv6_falls_through_for_every_provider_but_digitalocean() {
    for provider in [Provider::Aws, Provider::Azure, Provider::Gcp, Provider::Aliyun] {
        let transport =
            MockTransport::new().with_body(PUBLIC_IPV6_URL, r#"{"address":"2001:db8::42"}"#);
        let discoverer =
            discoverer_for(Some(provider), context(&transport, &MockResolver::new(), &lan()));

        assert_eq!(discoverer.public_ipv6().unwrap(), "2001:db8::42".parse::<Ipv6Addr>().unwrap());
        assert_eq!(transport.urls(), vec![PUBLIC_IPV6_URL.to_string()], "{provider}");
    }
}

#[test]
fn metadata_failure_is_not_masked_by_generic_default() {
    let transport = MockTransport::new()
        .with_body(gcp::PUBLIC_IPV4_URL, "<html>404</html>")
        .with_body(PUBLIC_IPV4_URL, r#"{"address":"198.51.100.1"}"#);
    let discoverer = gcp::discoverer(context(&transport, &MockResolver::new(), &MockInterfaces::default()));

    let err = discoverer.public_ipv4().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(transport.urls(), vec![gcp::PUBLIC_IPV4_URL.to_string()]);
}
