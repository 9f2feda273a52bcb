//! curl commands paired with their exact template-renderer output

use curl2httpx::CallArgs;

pub const ENDPOINT: &str = "https://httpbin.org/anything";

pub struct Conversion {
    pub name: &'static str,
    pub curl: &'static str,
    /// Extra call arguments as `(name, JSON value)`
    pub extra: &'static [(&'static str, &'static str)],
    pub expected: &'static str,
}

impl Conversion {
    pub fn call_args(&self) -> CallArgs {
        self.extra
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::from_str(value).expect("fixture JSON")))
            .collect()
    }
}

pub const CONVERSIONS: &[Conversion] = &[
    Conversion {
        name: "basic_get",
        curl: "curl 'https://httpbin.org/anything'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={},
    cookies={},
)"#,
    },
    Conversion {
        name: "colons_in_headers",
        curl: "curl 'https://httpbin.org/anything' -H 'authority:mobile.twitter.com'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "authority": "mobile.twitter.com"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "basic_headers",
        curl: "curl 'https://httpbin.org/anything' -H 'Accept-Encoding: gzip,deflate,sdch' -H 'Accept-Language: en-US,en;q=0.8'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Accept-Encoding": "gzip,deflate,sdch",
        "Accept-Language": "en-US,en;q=0.8"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "cookies",
        curl: "curl 'https://httpbin.org/anything' -H 'Accept-Encoding: gzip,deflate,sdch' -H 'Cookie: foo=bar; baz=baz2'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Accept-Encoding": "gzip,deflate,sdch"
    },
    cookies={
        "baz": "baz2",
        "foo": "bar"
    },
)"#,
    },
    Conversion {
        name: "cookies_lowercase",
        curl: "curl 'https://httpbin.org/anything' -H 'Accept-Encoding: gzip,deflate,sdch' -H 'cookie: foo=bar; baz=baz2'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Accept-Encoding": "gzip,deflate,sdch"
    },
    cookies={
        "baz": "baz2",
        "foo": "bar"
    },
)"#,
    },
    Conversion {
        name: "cookies_with_dollar_sign",
        curl: "curl 'https://httpbin.org/anything' -H 'Accept-Encoding: gzip,deflate,sdch' -H $'Cookie: somereallyreallylongcookie=true'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Accept-Encoding": "gzip,deflate,sdch"
    },
    cookies={
        "somereallyreallylongcookie": "true"
    },
)"#,
    },
    Conversion {
        name: "simple_post",
        curl: "curl 'https://httpbin.org/anything' -X POST",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    headers={},
    cookies={},
)"#,
    },
    Conversion {
        name: "post_with_data",
        curl: r#"curl 'https://httpbin.org/anything' --data '[{"evt":"newsletter.show","properties":{"newsletter_type":"userprofile"},"now":1396219192277,"ab":{"welcome_email":{"v":"2","g":2}}}]' -H 'Accept-Encoding: gzip,deflate,sdch' -H 'Cookie: foo=bar; baz=baz2'"#,
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    content="%5B%7B%22evt%22:%22newsletter.show%22,%22properties%22:%7B%22newsletter_type%22:%22userprofile%22%7D,%22now%22:1396219192277,%22ab%22:%7B%22welcome_email%22:%7B%22v%22:%222%22,%22g%22:2%7D%7D%7D%5D",
    headers={
        "Accept-Encoding": "gzip,deflate,sdch",
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={
        "baz": "baz2",
        "foo": "bar"
    },
)"#,
    },
    Conversion {
        name: "form_pair_data",
        curl: "curl 'https://httpbin.org/anything' --data 'a=1'",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    content="a=1",
    headers={
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "string_post",
        curl: "curl 'https://httpbin.org/anything' --data 'this is just some data'",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    content="this%20is%20just%20some%20data",
    headers={
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "binary_data",
        curl: "curl 'https://httpbin.org/anything' --data-binary 'this is just some data'",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    content="this is just some data",
    headers={
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "raw_data",
        curl: "curl 'https://httpbin.org/anything' --data-raw 'this is just some data'",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    content="this is just some data",
    headers={
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "another_binary_data",
        curl: r#"curl -H 'PID: 20000079' -H 'MT: 4' -H 'DivideVersion: 1.0' -H 'SupPhone: Redmi Note 3' -H 'SupFirm: 5.0.2' -H 'IMEI: wx_app' -H 'IMSI: wx_app' -H 'SessionId: ' -H 'CUID: wx_app' -H 'ProtocolVersion: 1.0' -H 'Sign: 7876480679c3cfe9ec0f82da290f0e0e' -H 'Accept: /' -H 'BodyEncryptType: 0' -H 'User-Agent: Mozilla/5.0 (Linux; Android 6.0.1; OPPO R9s Build/MMB29M; wv) hap/1.0/oppo ({"packageName":"com.oppo.market","type":"other","extra":{}})' -H 'Content-Type: text/plain; charset=utf-8' -H 'Host: pandahomeios.ifjing.com' --data-binary '{"CateID":"508","PageIndex":1,"PageSize":30}' --compressed 'https://httpbin.org/anything/action.ashx/otheraction/9028'"#,
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything/action.ashx/otheraction/9028",
    content="{\"CateID\":\"508\",\"PageIndex\":1,\"PageSize\":30}",
    headers={
        "Accept": "/",
        "BodyEncryptType": "0",
        "Content-Type": "text/plain; charset=utf-8",
        "CUID": "wx_app",
        "DivideVersion": "1.0",
        "Host": "pandahomeios.ifjing.com",
        "IMEI": "wx_app",
        "IMSI": "wx_app",
        "MT": "4",
        "PID": "20000079",
        "ProtocolVersion": "1.0",
        "SessionId": "",
        "Sign": "7876480679c3cfe9ec0f82da290f0e0e",
        "SupFirm": "5.0.2",
        "SupPhone": "Redmi Note 3",
        "User-Agent": "Mozilla/5.0 (Linux; Android 6.0.1; OPPO R9s Build/MMB29M; wv) hap/1.0/oppo ({\"packageName\":\"com.oppo.market\",\"type\":\"other\",\"extra\":{}})"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "insecure_flag",
        curl: "curl 'https://httpbin.org/anything' --insecure",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={},
    cookies={},
    verify=False
)"#,
    },
    Conversion {
        name: "request_kwargs",
        curl: "curl 'https://httpbin.org/anything' -H 'Accept-Encoding: gzip,deflate,sdch'",
        extra: &[("timeout", "0.1"), ("follow_redirects", "true")],
        expected: r#"httpx.get("https://httpbin.org/anything",
    follow_redirects=True,
    timeout=0.1,
    headers={
        "Accept-Encoding": "gzip,deflate,sdch"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "escaped_newlines",
        curl: "curl 'https://httpbin.org/anything' \\\n -H 'Accept-Encoding: gzip,deflate' \\\n --insecure",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Accept-Encoding": "gzip,deflate"
    },
    cookies={},
    verify=False
)"#,
    },
    Conversion {
        name: "escaped_unicode_in_cookie",
        curl: r"curl 'https://httpbin.org/anything' -H $'cookie: sid=00Dt00000004XYz\u0021ARg' ",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={},
    cookies={
        "sid": "00Dt00000004XYz!ARg"
    },
)"#,
    },
    Conversion {
        name: "proxy_and_proxy_auth",
        curl: "curl 'https://httpbin.org/anything' -U user: -x proxy.python.org:8080",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={},
    cookies={},
    proxy={
        "http": "http://user:@proxy.python.org:8080/",
        "https": "http://user:@proxy.python.org:8080/"
    },
)"#,
    },
    Conversion {
        name: "basic_auth",
        curl: "curl 'https://httpbin.org/anything' -u 'user:pass'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={},
    cookies={},
    auth=("user", "pass"),
)"#,
    },
    Conversion {
        name: "json_body",
        curl: r#"curl 'https://httpbin.org/anything' --json '{"a": 1, "b": [true, null], "c": "x"}'"#,
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    json={"a": 1, "b": [True, None], "c": "x"},
    headers={},
    cookies={},
)"#,
    },
    Conversion {
        name: "multipart_form",
        curl: "curl 'https://httpbin.org/anything' -F 'name=John' -F 'tag=a' -F 'tag=b'",
        extra: &[],
        expected: r#"httpx.post("https://httpbin.org/anything",
    data={
        "name": "John",
        "tag": [
            "a",
            "b"
        ]
    },
    headers={
        "Content-Type": "multipart/form-data"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "range_and_referer",
        curl: "curl 'https://httpbin.org/anything' -r 0-499 -e 'https://ref.example/'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers={
        "Range": "bytes=0-499",
        "Referer": "https://ref.example/"
    },
    cookies={},
)"#,
    },
    Conversion {
        name: "duplicate_headers",
        curl: "curl 'https://httpbin.org/anything' -H 'X-Tag: one' -H 'x-tag: two'",
        extra: &[],
        expected: r#"httpx.get("https://httpbin.org/anything",
    headers=[
        [
            "X-Tag",
            "one"
        ],
        [
            "x-tag",
            "two"
        ]
    ],
    cookies={},
)"#,
    },
    Conversion {
        name: "unix_socket",
        curl: "curl --unix-socket /var/run/docker.sock 'http://localhost/v1.43/info'",
        extra: &[],
        expected: r#"client = httpx.Client(transport=httpx.HTTPTransport(uds="/var/run/docker.sock"))
client.get("http://localhost/v1.43/info",
    headers={},
    cookies={},
)"#,
    },
    Conversion {
        name: "everything",
        curl: "curl -s -XPUT 'https://httpbin.org/anything' -H 'Accept: */*' -H 'Cookie: a=1' -d 'k=v' -u me -x socks5://p.example:1080 -k",
        extra: &[("timeout", "3")],
        expected: r#"httpx.put("https://httpbin.org/anything",
    timeout=3,
    content="k=v",
    headers={
        "Accept": "*/*",
        "Content-Type": "application/x-www-form-urlencoded"
    },
    cookies={
        "a": "1"
    },
    auth=("me", ""),
    proxy={
        "http": "socks5://p.example:1080/",
        "https": "socks5://p.example:1080/"
    },
    verify=False
)"#,
    },
    Conversion {
        name: "verify_call_arg",
        curl: "curl 'https://httpbin.org/anything'",
        extra: &[("verify", "false")],
        expected: r#"httpx.get("https://httpbin.org/anything",
    verify=False,
    headers={},
    cookies={},
)"#,
    },
    Conversion {
        name: "verify_call_arg_replaces_insecure",
        curl: "curl 'https://httpbin.org/anything' -k",
        extra: &[("verify", "true"), ("timeout", "5")],
        expected: r#"httpx.get("https://httpbin.org/anything",
    timeout=5,
    verify=True,
    headers={},
    cookies={},
)"#,
    },
];
